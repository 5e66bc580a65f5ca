use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use phrase_spotter_core::matching::domain::match_config::{
    DEFAULT_ALLOW_SUBSTRING, DEFAULT_MAX_DISTANCE, DEFAULT_WINDOW_SIZE,
};
use phrase_spotter_core::shared::constants::{
    AUDIO_EXTENSIONS, DEFAULT_LANGUAGE, DEFAULT_WHISPER_BINARY,
};

/// Settings file contents. Every field is optional in the JSON; missing
/// fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub phrase: Option<String>,
    pub max_distance: i32,
    pub allow_substring: bool,
    pub window_size: usize,
    pub jobs: usize,
    pub whisper_binary: String,
    pub model_path: Option<PathBuf>,
    pub language: String,
    pub extensions: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            phrase: None,
            max_distance: DEFAULT_MAX_DISTANCE,
            allow_substring: DEFAULT_ALLOW_SUBSTRING,
            window_size: DEFAULT_WINDOW_SIZE,
            jobs: default_jobs(),
            whisper_binary: DEFAULT_WHISPER_BINARY.to_string(),
            model_path: None,
            language: DEFAULT_LANGUAGE.to_string(),
            extensions: AUDIO_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

fn default_jobs() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

impl Settings {
    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("PhraseSpotter").join("settings.json"))
    }

    /// Load from `explicit` when given (any failure is an error), otherwise
    /// from the per-user config directory (failures fall back to defaults).
    pub fn load(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        match explicit {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| format!("Failed to read settings {}: {e}", path.display()))?;
                let settings = Self::from_json(&json)
                    .map_err(|e| format!("Invalid settings in {}: {e}", path.display()))?;
                Ok(settings)
            }
            None => Ok(Self::load_default()),
        }
    }

    fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        let Ok(json) = fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid settings in {}: {e}", path.display());
            Self::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_object_gives_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.max_distance, DEFAULT_MAX_DISTANCE);
        assert_eq!(settings.window_size, DEFAULT_WINDOW_SIZE);
        assert!(settings.jobs >= 1);
    }

    #[test]
    fn test_partial_settings() {
        let settings = Settings::from_json(
            r#"{"phrase": "hello world", "max_distance": 2, "model_path": "/models/ggml-base.en.bin"}"#,
        )
        .unwrap();
        assert_eq!(settings.phrase.as_deref(), Some("hello world"));
        assert_eq!(settings.max_distance, 2);
        assert_eq!(
            settings.model_path,
            Some(PathBuf::from("/models/ggml-base.en.bin"))
        );
        assert_eq!(settings.whisper_binary, DEFAULT_WHISPER_BINARY);
    }

    #[test]
    fn test_negative_distance_parses() {
        // rejected later, when the match configuration is built
        let settings = Settings::from_json(r#"{"max_distance": -3}"#).unwrap();
        assert_eq!(settings.max_distance, -3);
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, r#"{"phrase": "abc", "jobs": 2}"#).unwrap();
        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.phrase.as_deref(), Some("abc"));
        assert_eq!(settings.jobs, 2);
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let err = Settings::load(Some(Path::new("/nonexistent/settings.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read settings"));
    }

    #[test]
    fn test_load_explicit_invalid_json_errors() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let err = Settings::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid settings"));
    }

    #[test]
    fn test_round_trip_through_json() {
        let settings = Settings {
            phrase: Some("x".to_string()),
            ..Settings::default()
        };
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
