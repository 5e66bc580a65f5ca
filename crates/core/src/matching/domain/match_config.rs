use thiserror::Error;

use super::text_normalizer::normalize;

pub const DEFAULT_MAX_DISTANCE: i32 = 1;
pub const DEFAULT_ALLOW_SUBSTRING: bool = true;
pub const DEFAULT_WINDOW_SIZE: usize = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchConfigError {
    #[error("max distance must be zero or greater, got {0}")]
    NegativeMaxDistance(i32),
    #[error("window size must be at least 1 segment")]
    ZeroWindowSize,
    #[error("phrase {0:?} has no letters or digits to match")]
    EmptyPhrase(String),
}

/// Matching policy for one run. The phrase is normalized once here and the
/// value never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    phrase: String,
    max_distance: usize,
    allow_substring: bool,
    window_size: usize,
}

impl MatchConfig {
    pub fn new(
        phrase: &str,
        max_distance: i32,
        allow_substring: bool,
        window_size: usize,
    ) -> Result<Self, MatchConfigError> {
        let max_distance = usize::try_from(max_distance)
            .map_err(|_| MatchConfigError::NegativeMaxDistance(max_distance))?;
        if window_size == 0 {
            return Err(MatchConfigError::ZeroWindowSize);
        }
        let normalized = normalize(phrase);
        if normalized.is_empty() {
            return Err(MatchConfigError::EmptyPhrase(phrase.to_string()));
        }
        Ok(Self {
            phrase: normalized,
            max_distance,
            allow_substring,
            window_size,
        })
    }

    /// The normalized target phrase.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    pub fn allow_substring(&self) -> bool {
        self.allow_substring
    }

    /// Maximum number of consecutive segments joined into one window.
    pub fn window_size(&self) -> usize {
        self.window_size
    }
}
