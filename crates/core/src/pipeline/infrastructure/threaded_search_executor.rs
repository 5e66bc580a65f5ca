use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

use crate::pipeline::search_executor::{InputOutcome, SearchConfig, SearchExecutor, SearchTask};

/// Runs the search task on a fixed pool of scoped worker threads.
///
/// Layout: `feeder → [worker × jobs] → collector (caller thread)`
///
/// The feeder channel is bounded by the worker count, so at most `jobs`
/// inputs are in flight at once.
pub struct ThreadedSearchExecutor {
    jobs: usize,
}

impl ThreadedSearchExecutor {
    pub fn new(jobs: usize) -> Self {
        Self { jobs: jobs.max(1) }
    }
}

impl Default for ThreadedSearchExecutor {
    fn default() -> Self {
        Self::new(
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        )
    }
}

impl SearchExecutor for ThreadedSearchExecutor {
    fn execute(
        &self,
        inputs: &[PathBuf],
        task: &SearchTask<'_>,
        config: &SearchConfig,
    ) -> Vec<InputOutcome> {
        let total = inputs.len();
        if total == 0 {
            return Vec::new();
        }
        let workers = self.jobs.min(total);

        let (work_tx, work_rx) = crossbeam_channel::bounded::<&Path>(workers);
        let (done_tx, done_rx) = crossbeam_channel::unbounded::<InputOutcome>();

        std::thread::scope(|scope| {
            for _ in 0..workers {
                let work_rx = work_rx.clone();
                let done_tx = done_tx.clone();
                scope.spawn(move || {
                    for input in work_rx.iter() {
                        if config.cancelled.load(Ordering::Relaxed) {
                            break;
                        }
                        let outcome = InputOutcome {
                            input: input.to_path_buf(),
                            result: task(input).map_err(|e| e.to_string()),
                        };
                        if done_tx.send(outcome).is_err() {
                            break;
                        }
                    }
                });
            }
            drop(work_rx);
            drop(done_tx);

            scope.spawn(move || {
                for input in inputs {
                    if config.cancelled.load(Ordering::Relaxed) {
                        break;
                    }
                    if work_tx.send(input.as_path()).is_err() {
                        break;
                    }
                }
            });

            let mut outcomes = Vec::with_capacity(total);
            for outcome in done_rx.iter() {
                outcomes.push(outcome);
                if let Some(ref on_progress) = config.on_progress {
                    if !on_progress(outcomes.len(), total) {
                        config.cancelled.store(true, Ordering::Relaxed);
                    }
                }
            }
            outcomes
        })
    }
}
