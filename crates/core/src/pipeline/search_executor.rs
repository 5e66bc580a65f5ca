use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::transcript::domain::word_hit::WordHit;

/// Work done for a single input. Runs on worker threads.
pub type SearchTask<'a> =
    dyn Fn(&Path) -> Result<Vec<WordHit>, Box<dyn std::error::Error>> + Sync + 'a;

/// Progress callback: `(inputs_done, inputs_total)`. Returning `false`
/// requests cancellation.
pub type ProgressFn = Box<dyn Fn(usize, usize) -> bool + Send + Sync>;

/// Configuration for a search execution run.
#[derive(Default)]
pub struct SearchConfig {
    pub on_progress: Option<ProgressFn>,
    pub cancelled: Arc<AtomicBool>,
}

/// Result of running the task on one input.
#[derive(Debug)]
pub struct InputOutcome {
    pub input: PathBuf,
    pub result: Result<Vec<WordHit>, String>,
}

/// Abstracts how the per-input search is fanned out.
///
/// Each task invocation returns its own hits; implementations only collect
/// outcomes and make no ordering promise. Cancellation is checked between
/// inputs, never inside one.
pub trait SearchExecutor: Send + Sync {
    fn execute(
        &self,
        inputs: &[PathBuf],
        task: &SearchTask<'_>,
        config: &SearchConfig,
    ) -> Vec<InputOutcome>;
}
