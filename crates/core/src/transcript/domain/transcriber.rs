use std::path::Path;

/// Domain interface for speech-to-text transcription.
///
/// Implementations turn one audio input into the raw transcript text
/// (segment-structured JSON when available). Shared across worker threads.
pub trait Transcriber: Send + Sync {
    fn transcribe(&self, audio: &Path) -> Result<String, Box<dyn std::error::Error>>;
}
