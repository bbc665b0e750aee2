use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};

pub const DEFAULT_LEARN_RATE: f64 = 0.5;
pub const DEFAULT_MOMENTUM: f64 = 0.04;

/// Layer sizes and training hyperparameters of a `Network`.
///
/// Only the configuration is stored; trained weights are never persisted.
///
/// Fields:
/// - `input_size`  — length of every input vector
/// - `hidden_size` — neurons in the single hidden layer
/// - `output_size` — length of every output and target vector
/// - `learn_rate`  — step size; the default sits in (0, 1]
/// - `momentum`    — fraction of the previous delta re-applied on each update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    #[serde(default = "default_learn_rate")]
    pub learn_rate: f64,
    #[serde(default = "default_momentum")]
    pub momentum: f64,
}

fn default_learn_rate() -> f64 {
    DEFAULT_LEARN_RATE
}

fn default_momentum() -> f64 {
    DEFAULT_MOMENTUM
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec::new(64, 32, 1)
    }
}

impl NetworkSpec {
    /// A spec with the given sizes and the default hyperparameters.
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> NetworkSpec {
        NetworkSpec {
            input_size,
            hidden_size,
            output_size,
            learn_rate: DEFAULT_LEARN_RATE,
            momentum: DEFAULT_MOMENTUM,
        }
    }

    pub fn with_learn_rate(mut self, learn_rate: f64) -> NetworkSpec {
        self.learn_rate = learn_rate;
        self
    }

    pub fn with_momentum(mut self, momentum: f64) -> NetworkSpec {
        self.momentum = momentum;
        self
    }

    /// Checks layer sizes and hyperparameters.
    pub fn validate(&self) -> Result<()> {
        if self.input_size == 0 || self.hidden_size == 0 || self.output_size == 0 {
            return Err(NetworkError::InvalidTopology {
                input: self.input_size,
                hidden: self.hidden_size,
                output: self.output_size,
            });
        }
        validate_learn_rate(self.learn_rate)?;
        validate_momentum(self.momentum)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}

pub(crate) fn validate_learn_rate(learn_rate: f64) -> Result<()> {
    if learn_rate.is_finite() && learn_rate >= 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidHyperparameter { name: "learn_rate", value: learn_rate })
    }
}

pub(crate) fn validate_momentum(momentum: f64) -> Result<()> {
    if momentum.is_finite() && momentum >= 0.0 {
        Ok(())
    } else {
        Err(NetworkError::InvalidHyperparameter { name: "momentum", value: momentum })
    }
}
