/// One time-stamped unit of transcribed speech, as produced by the
/// transcription source. Timestamps are kept in their raw textual form and
/// only interpreted when a hit is built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment {
    pub text: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl Segment {
    pub fn new(text: impl Into<String>, start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            text: text.into(),
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
