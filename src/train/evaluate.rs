use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::network::Network;
use crate::train::loop_fn::check_dataset;

/// Result of running one labelled sample through a network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub outputs: Vec<f64>,
    pub error: f64,
}

/// Computes outputs and the summed absolute error for every sample, without
/// touching any weight.
pub fn evaluate(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
) -> Result<Vec<Evaluation>> {
    check_dataset(network, inputs, labels)?;

    inputs.iter().zip(labels)
        .map(|(input, label)| {
            let outputs = network.compute(input)?;
            let error = network.calculate_error(label)?;
            Ok(Evaluation { outputs, error })
        })
        .collect()
}
