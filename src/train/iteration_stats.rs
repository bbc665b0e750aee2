use serde::{Deserialize, Serialize};

/// Statistics for one pass over the training pairs, emitted by `train_loop`.
///
/// When `TrainConfig::progress_tx` is set, one value is sent at the end of
/// every completed iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationStats {
    /// 1-based iteration number.
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// Sum of `calculate_error` over all pairs, each measured on the forward
    /// pass right before its backpropagation.
    pub train_error: f64,
    /// Wall-clock duration of this iteration in milliseconds.
    pub elapsed_ms: u64,
}
