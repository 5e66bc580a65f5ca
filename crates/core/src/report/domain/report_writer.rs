use std::path::Path;

use crate::transcript::domain::word_hit::WordHit;

/// Domain interface for persisting search results.
pub trait ReportWriter: Send {
    fn write_report(&self, path: &Path, hits: &[WordHit])
        -> Result<(), Box<dyn std::error::Error>>;
}
