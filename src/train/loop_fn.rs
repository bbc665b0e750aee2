use std::sync::atomic::Ordering;
use std::time::Instant;

use tracing::{debug, info};

use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::train::iteration_stats::IterationStats;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.iterations` passes and returns the summed
/// training error of the **last completed iteration**.
///
/// Every iteration presents the pairs in the order given: a forward pass on
/// the input, then backpropagation of its label. There is no shuffling; the
/// caller's sequence is the schedule.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Errors
/// Every pair is size-checked before the first update, so a malformed dataset
/// fails without modifying the network.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<f64> {
    check_dataset(network, inputs, labels)?;

    let mut last_error = 0.0;

    for iteration in 1..=config.iterations {
        if stop_requested(config) {
            debug!(iteration, "stop flag set, ending training");
            break;
        }

        let t_start = Instant::now();
        let train_error = run_one_iteration(network, inputs, labels)?;
        last_error = train_error;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        if config.log_every > 0 && (iteration % config.log_every == 0 || iteration == 1) {
            info!(
                iteration,
                total = config.iterations,
                progress = iteration as f64 / config.iterations as f64,
                train_error,
                "training"
            );
        }

        let stats = IterationStats {
            iteration,
            total_iterations: config.iterations,
            train_error,
            elapsed_ms,
        };

        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                debug!(iteration, "progress receiver dropped, ending training");
                break;
            }
        }
    }

    Ok(last_error)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One pass: train + back_propagate for every pair, summing the error seen
/// just before each update.
fn run_one_iteration(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
) -> Result<f64> {
    let mut total_error = 0.0;
    for (input, label) in inputs.iter().zip(labels) {
        network.train(input)?;
        total_error += network.calculate_error(label)?;
        network.back_propagate(label)?;
    }
    Ok(total_error)
}

fn stop_requested(config: &TrainConfig) -> bool {
    config.stop_flag.as_ref()
        .map(|flag| flag.load(Ordering::Relaxed))
        .unwrap_or(false)
}

/// Validates pair counts and every vector length against the network.
pub(crate) fn check_dataset(
    network: &Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
) -> Result<()> {
    if inputs.len() != labels.len() {
        return Err(NetworkError::DatasetMismatch {
            inputs: inputs.len(),
            labels: labels.len(),
        });
    }
    for (input, label) in inputs.iter().zip(labels) {
        if input.len() != network.input_size() {
            return Err(NetworkError::InputSizeMismatch {
                expected: network.input_size(),
                actual: input.len(),
            });
        }
        if label.len() != network.output_size() {
            return Err(NetworkError::TargetSizeMismatch {
                expected: network.output_size(),
                actual: label.len(),
            });
        }
    }
    Ok(())
}
