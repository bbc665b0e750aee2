use rand::Rng;
use serde::{Deserialize, Serialize};

/// Index of a neuron in the network's neuron arena.
pub type NeuronId = usize;
/// Index of a synapse in the network's synapse arena.
pub type SynapseId = usize;

/// Weighted edge from a neuron in one layer to a neuron in the next.
///
/// Synapses live in a single arena owned by the `Network`; both endpoints
/// refer to them by `SynapseId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synapse {
    pub source: NeuronId,
    pub destination: NeuronId,
    pub weight: f64,
    /// Delta applied on the last update, fed back in as momentum.
    pub weight_delta: f64,
}

impl Synapse {
    /// Connects `source` to `destination` with a weight drawn uniformly on [-1, 1].
    pub fn new<R: Rng>(source: NeuronId, destination: NeuronId, rng: &mut R) -> Synapse {
        Synapse {
            source,
            destination,
            weight: rng.gen_range(-1.0..=1.0),
            weight_delta: 0.0,
        }
    }
}
