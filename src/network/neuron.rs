use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::network::synapse::SynapseId;

/// A sigmoid unit.
///
/// `inputs` is empty for input-layer neurons and `outputs` is empty for
/// output-layer neurons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    /// Activation from the most recent forward pass (or the injected input).
    pub value: f64,
    pub bias: f64,
    pub bias_delta: f64,
    /// Only meaningful right after `Network::back_propagate`.
    pub gradient: f64,
    pub inputs: Vec<SynapseId>,
    pub outputs: Vec<SynapseId>,
}

impl Neuron {
    /// Creates an unconnected neuron with a bias drawn uniformly on [-1, 1].
    pub fn new<R: Rng>(rng: &mut R) -> Neuron {
        Neuron {
            value: 0.0,
            bias: rng.gen_range(-1.0..=1.0),
            bias_delta: 0.0,
            gradient: 0.0,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}
