use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};

use crate::train::iteration_stats::IterationStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`  — number of passes over the training pairs
/// - `log_every`   — emit an `info` progress event every this many iterations
///                   (0 disables progress logging)
/// - `progress_tx` — optional channel; one `IterationStats` per completed
///                   iteration. A dropped receiver ends the run early.
/// - `stop_flag`   — optional atomic flag checked between iterations
pub struct TrainConfig {
    pub iterations: usize,
    pub log_every: usize,
    pub progress_tx: Option<mpsc::Sender<IterationStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel and no stop flag,
    /// logging progress ten times over the run.
    pub fn new(iterations: usize) -> Self {
        TrainConfig {
            iterations,
            log_every: (iterations / 10).max(1),
            progress_tx: None,
            stop_flag: None,
        }
    }

    pub fn with_log_every(mut self, log_every: usize) -> Self {
        self.log_every = log_every;
        self
    }
}
