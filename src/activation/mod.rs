pub mod activation;

pub use activation::{sigmoid, sigmoid_derivative, SATURATION_LIMIT};
