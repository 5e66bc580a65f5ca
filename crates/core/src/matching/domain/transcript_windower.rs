use super::match_config::MatchConfig;
use super::phrase_matcher::soft_contains;
use crate::transcript::domain::segment::Segment;
use crate::transcript::domain::time_parser::parse_optional_time;
use crate::transcript::domain::word_hit::WordHit;

/// Searches time-stamped segments for the configured phrase.
///
/// A phrase may straddle segment boundaries, so each candidate start grows a
/// window of up to `window_size` consecutive segments. Once a window
/// accepts, the search resumes after its last segment: hits never share a
/// segment.
pub struct TranscriptWindower;

impl TranscriptWindower {
    /// Each hit reports the tightened window: leading segments the match
    /// does not need are left out of its start time and context.
    pub fn find_hits(segments: &[Segment], config: &MatchConfig, source_id: &str) -> Vec<WordHit> {
        let segments: Vec<&Segment> = segments.iter().filter(|s| !s.is_blank()).collect();

        let mut hits = Vec::new();
        let mut cursor = 0;
        while cursor < segments.len() {
            match Self::first_accepting_end(&segments, cursor, config) {
                Some(last) => {
                    let first = Self::tighten_start(&segments, cursor, last, config);
                    hits.push(Self::build_hit(&segments[first..=last], config, source_id));
                    cursor = last + 1;
                }
                None => cursor += 1,
            }
        }
        hits
    }

    /// Grow a window from `start` one segment at a time and return the index
    /// of the segment whose addition made the phrase appear.
    fn first_accepting_end(
        segments: &[&Segment],
        start: usize,
        config: &MatchConfig,
    ) -> Option<usize> {
        let bound = start.saturating_add(config.window_size()).min(segments.len());
        let mut combined = String::new();
        for end in start..bound {
            if !combined.is_empty() {
                combined.push(' ');
            }
            combined.push_str(segments[end].text.trim());
            if Self::accepts(&combined, config) {
                return Some(end);
            }
        }
        None
    }

    /// Drop leading segments the match does not need, so the reported start
    /// time points at the segment where the phrase begins.
    fn tighten_start(segments: &[&Segment], start: usize, last: usize, config: &MatchConfig) -> usize {
        (start + 1..=last)
            .rev()
            .find(|&first| Self::accepts(&join_text(&segments[first..=last]), config))
            .unwrap_or(start)
    }

    fn accepts(text: &str, config: &MatchConfig) -> bool {
        soft_contains(
            text,
            config.phrase(),
            config.max_distance(),
            config.allow_substring(),
        )
    }

    fn build_hit(window: &[&Segment], config: &MatchConfig, source_id: &str) -> WordHit {
        let first = window[0];
        let last = window[window.len() - 1];
        let start_time = parse_optional_time(first.start.as_deref()).max(0.0);
        let end_time = parse_optional_time(last.end.as_deref()).max(start_time);
        WordHit {
            source: source_id.to_string(),
            phrase: config.phrase().to_string(),
            start_time,
            end_time,
            context: join_text(window),
        }
    }
}

fn join_text(segments: &[&Segment]) -> String {
    segments
        .iter()
        .map(|s| s.text.trim())
        .collect::<Vec<_>>()
        .join(" ")
}
