pub mod activation;
pub mod error;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_derivative};
pub use error::{NetworkError, Result};
pub use loss::AbsoluteErrorSum;
pub use network::network::{LayerKind, Network};
pub use network::spec::NetworkSpec;
pub use optim::MomentumSgd;
pub use train::{evaluate, train_loop, TrainConfig};
