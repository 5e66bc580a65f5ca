use std::path::{Path, PathBuf};

use crate::matching::phrase_spotter::PhraseSpotter;
use crate::pipeline::search_executor::{SearchConfig, SearchExecutor};
use crate::transcript::domain::transcriber::Transcriber;
use crate::transcript::domain::word_hit::WordHit;

/// Outcome of a search across many inputs.
#[derive(Debug, Default)]
pub struct SearchSummary {
    /// All hits, ordered by source then start time.
    pub hits: Vec<WordHit>,
    /// Inputs that could not be transcribed, with the reason, ordered by path.
    pub failures: Vec<(PathBuf, String)>,
    /// Inputs that were attempted (succeeded or failed).
    pub processed: usize,
}

pub struct SearchAudioUseCase {
    transcriber: Box<dyn Transcriber>,
    spotter: PhraseSpotter,
    executor: Box<dyn SearchExecutor>,
}

impl SearchAudioUseCase {
    pub fn new(
        transcriber: Box<dyn Transcriber>,
        spotter: PhraseSpotter,
        executor: Box<dyn SearchExecutor>,
    ) -> Self {
        Self {
            transcriber,
            spotter,
            executor,
        }
    }

    pub fn run(&self, inputs: &[PathBuf], config: &SearchConfig) -> SearchSummary {
        let task = |input: &Path| -> Result<Vec<WordHit>, Box<dyn std::error::Error>> {
            let raw = self.transcriber.transcribe(input)?;
            let source_id = input.display().to_string();
            let hits = self.spotter.parse(&raw, &source_id);
            log::debug!("{source_id}: {} hit(s)", hits.len());
            Ok(hits)
        };

        let outcomes = self.executor.execute(inputs, &task, config);

        let mut summary = SearchSummary {
            processed: outcomes.len(),
            ..SearchSummary::default()
        };
        for outcome in outcomes {
            match outcome.result {
                Ok(hits) => summary.hits.extend(hits),
                Err(reason) => {
                    log::warn!("Skipping {}: {reason}", outcome.input.display());
                    summary.failures.push((outcome.input, reason));
                }
            }
        }

        sort_hits(&mut summary.hits);
        summary.failures.sort_by(|a, b| a.0.cmp(&b.0));
        summary
    }
}

/// Deterministic report order regardless of which worker finished first.
pub fn sort_hits(hits: &mut [WordHit]) {
    hits.sort_by(|a, b| {
        a.source
            .cmp(&b.source)
            .then_with(|| a.start_time.total_cmp(&b.start_time))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::domain::match_config::MatchConfig;
    use crate::pipeline::infrastructure::threaded_search_executor::ThreadedSearchExecutor;
    use crate::transcript::infrastructure::whisper_json_reader::WhisperJsonReader;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    // ─── Stubs ───

    struct StubTranscriber {
        transcripts: HashMap<PathBuf, String>,
    }

    impl Transcriber for StubTranscriber {
        fn transcribe(&self, audio: &Path) -> Result<String, Box<dyn std::error::Error>> {
            self.transcripts
                .get(audio)
                .cloned()
                .ok_or_else(|| format!("cannot transcribe {}", audio.display()).into())
        }
    }

    fn whisper_json(segments: &[(&str, &str, &str)]) -> String {
        let entries: Vec<String> = segments
            .iter()
            .map(|(from, to, text)| {
                format!(r#"{{"timestamps": {{"from": "{from}", "to": "{to}"}}, "text": "{text}"}}"#)
            })
            .collect();
        format!(r#"{{"transcription": [{}]}}"#, entries.join(","))
    }

    fn use_case(transcripts: Vec<(&str, String)>, jobs: usize) -> SearchAudioUseCase {
        let transcriber = StubTranscriber {
            transcripts: transcripts
                .into_iter()
                .map(|(p, t)| (PathBuf::from(p), t))
                .collect(),
        };
        let spotter = PhraseSpotter::new(
            MatchConfig::new("hello world", 1, true, 3).unwrap(),
            Box::new(WhisperJsonReader),
        );
        SearchAudioUseCase::new(
            Box::new(transcriber),
            spotter,
            Box::new(ThreadedSearchExecutor::new(jobs)),
        )
    }

    #[test]
    fn test_hits_sorted_by_source_then_start() {
        let uc = use_case(
            vec![
                (
                    "b.wav",
                    whisper_json(&[
                        ("00:00:09,000", "00:00:10,000", "hello world"),
                        ("00:00:01,000", "00:00:02,000", "hello world"),
                    ]),
                ),
                (
                    "a.wav",
                    whisper_json(&[("00:00:05,000", "00:00:06,000", "helo world")]),
                ),
            ],
            4,
        );
        let inputs = vec![PathBuf::from("b.wav"), PathBuf::from("a.wav")];

        let summary = uc.run(&inputs, &SearchConfig::default());

        assert_eq!(summary.processed, 2);
        assert!(summary.failures.is_empty());
        let order: Vec<(&str, f64)> = summary
            .hits
            .iter()
            .map(|h| (h.source.as_str(), h.start_time))
            .collect();
        assert_eq!(order, vec![("a.wav", 5.0), ("b.wav", 1.0), ("b.wav", 9.0)]);
    }

    #[test]
    fn test_failed_input_skipped_others_proceed() {
        let uc = use_case(
            vec![(
                "good.wav",
                whisper_json(&[("00:00:00,000", "00:00:01,000", "hello world")]),
            )],
            2,
        );
        let inputs = vec![PathBuf::from("bad.wav"), PathBuf::from("good.wav")];

        let summary = uc.run(&inputs, &SearchConfig::default());

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.hits.len(), 1);
        assert_eq!(summary.hits[0].source, "good.wav");
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, PathBuf::from("bad.wav"));
        assert!(summary.failures[0].1.contains("cannot transcribe"));
    }

    #[test]
    fn test_unstructured_transcript_uses_fallback() {
        let uc = use_case(vec![("raw.wav", "so hello world then".to_string())], 1);
        let summary = uc.run(&[PathBuf::from("raw.wav")], &SearchConfig::default());
        assert_eq!(summary.hits.len(), 1);
        assert_eq!(summary.hits[0].start_time, 0.0);
        assert_eq!(summary.hits[0].end_time, 0.0);
    }

    #[test]
    fn test_results_independent_of_parallelism() {
        let transcripts: Vec<(String, String)> = (0..12)
            .map(|i| {
                (
                    format!("clip_{i:02}.wav"),
                    whisper_json(&[
                        ("00:00:00,000", "00:00:01,000", "hello"),
                        ("00:00:01,000", "00:00:02,000", "world"),
                    ]),
                )
            })
            .collect();
        let inputs: Vec<PathBuf> = transcripts.iter().map(|(p, _)| PathBuf::from(p)).collect();
        let borrowed = || {
            transcripts
                .iter()
                .map(|(p, t)| (p.as_str(), t.clone()))
                .collect::<Vec<_>>()
        };

        let serial = use_case(borrowed(), 1).run(&inputs, &SearchConfig::default());
        let parallel = use_case(borrowed(), 6).run(&inputs, &SearchConfig::default());

        assert_eq!(serial.hits, parallel.hits);
        assert_eq!(serial.hits.len(), 12);
    }

    #[test]
    fn test_cancelled_run_processes_nothing() {
        let uc = use_case(vec![], 2);
        let config = SearchConfig {
            on_progress: None,
            cancelled: Arc::new(AtomicBool::new(true)),
        };
        let summary = uc.run(&[PathBuf::from("a.wav")], &config);
        assert_eq!(summary.processed, 0);
        assert!(config.cancelled.load(Ordering::Relaxed));
    }

    #[test]
    fn test_sort_hits_stable_for_equal_keys() {
        let mk = |ctx: &str| WordHit {
            source: "a".to_string(),
            phrase: "p".to_string(),
            start_time: 1.0,
            end_time: 1.0,
            context: ctx.to_string(),
        };
        let mut hits = vec![mk("first"), mk("second")];
        sort_hits(&mut hits);
        assert_eq!(hits[0].context, "first");
    }
}
