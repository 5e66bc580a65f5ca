/// A single occurrence of the target phrase inside one transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct WordHit {
    pub source: String,
    /// Normalized form of the phrase that was searched for.
    pub phrase: String,
    pub start_time: f64,
    pub end_time: f64,
    pub context: String,
}

