use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::activation::{sigmoid, sigmoid_derivative};
use crate::error::{NetworkError, Result};
use crate::loss::AbsoluteErrorSum;
use crate::network::neuron::Neuron;
use crate::network::spec::{validate_learn_rate, validate_momentum, NetworkSpec};
use crate::network::synapse::{NeuronId, Synapse, SynapseId};
use crate::optim::MomentumSgd;

/// One of the three fixed layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Input,
    Hidden,
    Output,
}

/// Fully connected input → hidden → output network of sigmoid units.
///
/// Neurons and synapses are stored in two arenas; layers and the per-neuron
/// synapse lists hold indices into them.
#[derive(Debug, Clone)]
pub struct Network {
    learn_rate: f64,
    momentum: f64,
    neurons: Vec<Neuron>,
    synapses: Vec<Synapse>,
    input_layer: Vec<NeuronId>,
    hidden_layer: Vec<NeuronId>,
    output_layer: Vec<NeuronId>,
}

impl Network {
    /// Builds the network described by `spec`, drawing every bias and weight
    /// from `rng` uniformly on [-1, 1].
    ///
    /// Draw order: neurons in layer order, each neuron's bias followed by the
    /// weights of its incoming synapses.
    pub fn new<R: Rng>(spec: &NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;

        let total = spec.input_size + spec.hidden_size + spec.output_size;
        let mut neurons = Vec::with_capacity(total);
        let mut synapses = Vec::with_capacity(
            spec.input_size * spec.hidden_size + spec.hidden_size * spec.output_size,
        );

        let input_layer = add_layer(&mut neurons, &mut synapses, &[], spec.input_size, rng);
        let hidden_layer =
            add_layer(&mut neurons, &mut synapses, &input_layer, spec.hidden_size, rng);
        let output_layer =
            add_layer(&mut neurons, &mut synapses, &hidden_layer, spec.output_size, rng);

        debug!(
            input = spec.input_size,
            hidden = spec.hidden_size,
            output = spec.output_size,
            synapses = synapses.len(),
            learn_rate = spec.learn_rate,
            momentum = spec.momentum,
            "network built"
        );

        Ok(Network {
            learn_rate: spec.learn_rate,
            momentum: spec.momentum,
            neurons,
            synapses,
            input_layer,
            hidden_layer,
            output_layer,
        })
    }

    /// Same as `new`, with a `StdRng` seeded from `seed` for reproducible weights.
    pub fn with_seed(spec: &NetworkSpec, seed: u64) -> Result<Network> {
        let mut rng = StdRng::seed_from_u64(seed);
        Network::new(spec, &mut rng)
    }

    /// Builds a network from bare layer sizes using the default hyperparameters.
    pub fn from_sizes<R: Rng>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> Result<Network> {
        Network::new(&NetworkSpec::new(input_size, hidden_size, output_size), rng)
    }

    /// Forward pass.
    ///
    /// Loads `inputs` into the input layer, then recomputes the hidden layer and
    /// after it the output layer. Fails without touching any neuron if the
    /// length does not match the input layer.
    pub fn train(&mut self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.input_layer.len() {
            return Err(NetworkError::InputSizeMismatch {
                expected: self.input_layer.len(),
                actual: inputs.len(),
            });
        }

        for (&id, &x) in self.input_layer.iter().zip(inputs) {
            self.neurons[id].value = x;
        }
        for layer in [&self.hidden_layer, &self.output_layer] {
            for &id in layer {
                let z = weighted_input(&self.neurons, &self.synapses, id);
                self.neurons[id].value = sigmoid(z);
            }
        }
        Ok(())
    }

    /// Runs `train` and returns the output layer's values.
    pub fn compute(&mut self, inputs: &[f64]) -> Result<Vec<f64>> {
        self.train(inputs)?;
        Ok(self.outputs())
    }

    /// Σ |target_i - output_i| over the output layer, using the values left by
    /// the most recent forward pass.
    pub fn calculate_error(&self, targets: &[f64]) -> Result<f64> {
        self.check_targets(targets)?;
        Ok(AbsoluteErrorSum::loss(&self.outputs(), targets))
    }

    /// Backpropagates `targets` through the values of the last forward pass and
    /// applies one momentum update to every bias and weight.
    ///
    /// Output gradients are computed first because the hidden gradients read
    /// them through the outgoing synapses; weights only change once both
    /// layers have their gradients.
    pub fn back_propagate(&mut self, targets: &[f64]) -> Result<()> {
        self.check_targets(targets)?;

        let errors = AbsoluteErrorSum::output_errors(&self.outputs(), targets);
        for (&id, error) in self.output_layer.iter().zip(errors) {
            let neuron = &mut self.neurons[id];
            neuron.gradient = error * sigmoid_derivative(neuron.value);
        }

        for &id in &self.hidden_layer {
            let downstream = downstream_gradient(&self.neurons, &self.synapses, id);
            let neuron = &mut self.neurons[id];
            neuron.gradient = downstream * sigmoid_derivative(neuron.value);
        }

        let optimizer = MomentumSgd::new(self.learn_rate, self.momentum);
        for layer in [&self.hidden_layer, &self.output_layer] {
            for &id in layer {
                update_weights(&mut self.neurons, &mut self.synapses, id, &optimizer);
            }
        }
        Ok(())
    }

    /// Current activations of the output layer.
    pub fn outputs(&self) -> Vec<f64> {
        self.values(LayerKind::Output)
    }

    /// Current activations of one layer, in order.
    pub fn values(&self, kind: LayerKind) -> Vec<f64> {
        self.layer(kind).map(|n| n.value).collect()
    }

    /// Neurons of one layer, in order.
    pub fn layer(&self, kind: LayerKind) -> impl Iterator<Item = &Neuron> + '_ {
        self.layer_ids(kind).iter().map(move |&id| &self.neurons[id])
    }

    /// Arena handles of one layer's neurons, in order.
    pub fn layer_ids(&self, kind: LayerKind) -> &[NeuronId] {
        match kind {
            LayerKind::Input => &self.input_layer,
            LayerKind::Hidden => &self.hidden_layer,
            LayerKind::Output => &self.output_layer,
        }
    }

    pub fn input_size(&self) -> usize {
        self.input_layer.len()
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden_layer.len()
    }

    pub fn output_size(&self) -> usize {
        self.output_layer.len()
    }

    pub fn neuron(&self, id: NeuronId) -> Option<&Neuron> {
        self.neurons.get(id)
    }

    pub fn synapse(&self, id: SynapseId) -> Option<&Synapse> {
        self.synapses.get(id)
    }

    pub fn synapses(&self) -> &[Synapse] {
        &self.synapses
    }

    pub fn learn_rate(&self) -> f64 {
        self.learn_rate
    }

    pub fn momentum(&self) -> f64 {
        self.momentum
    }

    pub fn set_learn_rate(&mut self, learn_rate: f64) -> Result<()> {
        validate_learn_rate(learn_rate)?;
        self.learn_rate = learn_rate;
        Ok(())
    }

    pub fn set_momentum(&mut self, momentum: f64) -> Result<()> {
        validate_momentum(momentum)?;
        self.momentum = momentum;
        Ok(())
    }

    /// The spec this network would be rebuilt from (sizes and current hyperparameters).
    pub fn spec(&self) -> NetworkSpec {
        NetworkSpec::new(self.input_size(), self.hidden_size(), self.output_size())
            .with_learn_rate(self.learn_rate)
            .with_momentum(self.momentum)
    }

    fn check_targets(&self, targets: &[f64]) -> Result<()> {
        if targets.len() != self.output_layer.len() {
            return Err(NetworkError::TargetSizeMismatch {
                expected: self.output_layer.len(),
                actual: targets.len(),
            });
        }
        Ok(())
    }
}

/// Appends `size` neurons, each fully connected from every neuron of `previous`.
fn add_layer<R: Rng>(
    neurons: &mut Vec<Neuron>,
    synapses: &mut Vec<Synapse>,
    previous: &[NeuronId],
    size: usize,
    rng: &mut R,
) -> Vec<NeuronId> {
    let mut layer = Vec::with_capacity(size);
    for _ in 0..size {
        let id = neurons.len();
        neurons.push(Neuron::new(rng));
        for &source in previous {
            let sid = synapses.len();
            synapses.push(Synapse::new(source, id, rng));
            neurons[source].outputs.push(sid);
            neurons[id].inputs.push(sid);
        }
        layer.push(id);
    }
    layer
}

/// Σ weight * source value over incoming synapses, plus the bias.
fn weighted_input(neurons: &[Neuron], synapses: &[Synapse], id: NeuronId) -> f64 {
    let neuron = &neurons[id];
    let sum: f64 = neuron.inputs.iter()
        .map(|&s| synapses[s].weight * neurons[synapses[s].source].value)
        .sum();
    sum + neuron.bias
}

/// Σ destination gradient * weight over outgoing synapses.
fn downstream_gradient(neurons: &[Neuron], synapses: &[Synapse], id: NeuronId) -> f64 {
    neurons[id].outputs.iter()
        .map(|&s| neurons[synapses[s].destination].gradient * synapses[s].weight)
        .sum()
}

fn update_weights(
    neurons: &mut [Neuron],
    synapses: &mut [Synapse],
    id: NeuronId,
    optimizer: &MomentumSgd,
) {
    let neuron = &mut neurons[id];
    let gradient = neuron.gradient;
    optimizer.step(&mut neuron.bias, &mut neuron.bias_delta, gradient);

    for &s in &neurons[id].inputs {
        let source_value = neurons[synapses[s].source].value;
        let synapse = &mut synapses[s];
        optimizer.step(&mut synapse.weight, &mut synapse.weight_delta, gradient * source_value);
    }
}
