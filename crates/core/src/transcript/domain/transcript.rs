use super::segment::Segment;

/// A transcript as read from the transcription source.
#[derive(Clone, Debug, PartialEq)]
pub enum Transcript {
    /// Ordered, time-stamped segments.
    Segmented(Vec<Segment>),
    /// Opaque text with no segment structure.
    Unstructured(String),
}

