use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::shared::constants::{DEFAULT_LANGUAGE, WHISPER_OUTPUT_STEM};
use crate::transcript::domain::transcriber::Transcriber;

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("whisper model not found at: {0}")]
    ModelNotFound(PathBuf),
    #[error("failed to create scratch directory: {0}")]
    ScratchDir(#[source] std::io::Error),
    #[error("failed to launch {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{binary} exited with {status}: {stderr}")]
    Failed {
        binary: String,
        status: ExitStatus,
        stderr: String,
    },
    #[error("failed to read transcript {path}: {source}")]
    ReadOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Speech recognizer backed by the whisper.cpp command line tool.
///
/// Each call runs the binary once, asking it for JSON output in a private
/// scratch directory, and returns the JSON text.
#[derive(Debug)]
pub struct WhisperCliTranscriber {
    binary: String,
    model_path: PathBuf,
    language: String,
    threads: usize,
}

impl WhisperCliTranscriber {
    pub fn new(binary: &str, model_path: &Path) -> Result<Self, TranscribeError> {
        if !model_path.exists() {
            return Err(TranscribeError::ModelNotFound(model_path.to_path_buf()));
        }
        Ok(Self {
            binary: binary.to_string(),
            model_path: model_path.to_path_buf(),
            language: DEFAULT_LANGUAGE.to_string(),
            threads: 4,
        })
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    fn run(&self, audio: &Path) -> Result<String, TranscribeError> {
        let scratch = tempfile::TempDir::new().map_err(TranscribeError::ScratchDir)?;
        let prefix = scratch.path().join(WHISPER_OUTPUT_STEM);

        log::debug!("Transcribing {} with {}", audio.display(), self.binary);
        let output = Command::new(&self.binary)
            .arg("-m")
            .arg(&self.model_path)
            .arg("-f")
            .arg(audio)
            .arg("-l")
            .arg(&self.language)
            .arg("-t")
            .arg(self.threads.to_string())
            .arg("-oj")
            .arg("-of")
            .arg(&prefix)
            .arg("-np")
            .output()
            .map_err(|e| TranscribeError::Spawn {
                binary: self.binary.clone(),
                source: e,
            })?;

        if !output.status.success() {
            return Err(TranscribeError::Failed {
                binary: self.binary.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let json_path = prefix.with_extension("json");
        fs::read_to_string(&json_path).map_err(|e| TranscribeError::ReadOutput {
            path: json_path.clone(),
            source: e,
        })
    }
}

impl Transcriber for WhisperCliTranscriber {
    fn transcribe(&self, audio: &Path) -> Result<String, Box<dyn std::error::Error>> {
        Ok(self.run(audio)?)
    }
}
