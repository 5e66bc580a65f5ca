use crate::matching::domain::match_config::MatchConfig;
use crate::matching::domain::phrase_matcher::soft_contains;
use crate::matching::domain::transcript_windower::TranscriptWindower;
use crate::transcript::domain::segment::Segment;
use crate::transcript::domain::transcript::Transcript;
use crate::transcript::domain::transcript_reader::TranscriptReader;
use crate::transcript::domain::word_hit::WordHit;

/// Context recorded for a hit found in a transcript without segment timing.
pub const UNSTRUCTURED_CONTEXT: &str = "[unstructured transcript: no segment timing available]";

/// Entry point of the matching engine: finds the configured phrase in one
/// transcript. Holds no mutable state, so one instance can be shared by any
/// number of threads.
pub struct PhraseSpotter {
    config: MatchConfig,
    reader: Box<dyn TranscriptReader>,
}

impl PhraseSpotter {
    pub fn new(config: MatchConfig, reader: Box<dyn TranscriptReader>) -> Self {
        Self { config, reader }
    }

    /// Search a raw transcript. Segment structure is used whenever the reader
    /// finds it; otherwise the whole text is searched once. Malformed or
    /// empty input yields no hits.
    pub fn parse(&self, source: &str, source_id: &str) -> Vec<WordHit> {
        self.search(&self.reader.read(source), source_id)
    }

    pub fn search(&self, transcript: &Transcript, source_id: &str) -> Vec<WordHit> {
        match transcript {
            Transcript::Segmented(segments) => self.find_hits(segments, source_id),
            Transcript::Unstructured(text) => self.search_unstructured(text, source_id),
        }
    }

    pub fn find_hits(&self, segments: &[Segment], source_id: &str) -> Vec<WordHit> {
        TranscriptWindower::find_hits(segments, &self.config, source_id)
    }

    /// Emits at most one zero-length hit for the whole text.
    pub fn search_unstructured(&self, text: &str, source_id: &str) -> Vec<WordHit> {
        log::debug!("No segment structure in {source_id}, searching raw text");
        let found = soft_contains(
            text,
            self.config.phrase(),
            self.config.max_distance(),
            self.config.allow_substring(),
        );
        if !found {
            return Vec::new();
        }
        vec![WordHit {
            source: source_id.to_string(),
            phrase: self.config.phrase().to_string(),
            start_time: 0.0,
            end_time: 0.0,
            context: UNSTRUCTURED_CONTEXT.to_string(),
        }]
    }
}
