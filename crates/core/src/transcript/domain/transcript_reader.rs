use super::transcript::Transcript;

/// Turns the raw output of a transcription run into a [`Transcript`].
///
/// Reading never fails: input without usable segment structure comes back
/// as [`Transcript::Unstructured`].
pub trait TranscriptReader: Send + Sync {
    fn read(&self, raw: &str) -> Transcript;
}
