use thiserror::Error;

/// Errors raised while building or driving a `Network`.
///
/// Size mismatches are detected before any neuron state is touched, so the
/// network stays usable after one of them is returned.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Invalid topology: {input}/{hidden}/{output} (every layer needs at least one neuron)")]
    InvalidTopology {
        input: usize,
        hidden: usize,
        output: usize,
    },

    #[error("Input size mismatch: expected {expected}, got {actual}")]
    InputSizeMismatch { expected: usize, actual: usize },

    #[error("Target size mismatch: expected {expected}, got {actual}")]
    TargetSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid hyperparameter {name} = {value}")]
    InvalidHyperparameter { name: &'static str, value: f64 },

    #[error("Dataset mismatch: {inputs} inputs but {labels} labels")]
    DatasetMismatch { inputs: usize, labels: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
