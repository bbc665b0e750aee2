pub mod network;
pub mod neuron;
pub mod spec;
pub mod synapse;

pub use network::Network;
pub use neuron::Neuron;
pub use spec::NetworkSpec;
pub use synapse::{NeuronId, Synapse, SynapseId};
