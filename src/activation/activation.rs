/// Pre-activations beyond this magnitude saturate to exactly 0 or 1.
pub const SATURATION_LIMIT: f64 = 45.0;

/// Logistic sigmoid with hard saturation outside `[-45, 45]`, which keeps
/// `exp` from overflowing on extreme inputs.
pub fn sigmoid(x: f64) -> f64 {
    if x < -SATURATION_LIMIT {
        0.0
    } else if x > SATURATION_LIMIT {
        1.0
    } else {
        1.0 / (1.0 + (-x).exp())
    }
}

/// Derivative of the sigmoid written in terms of its output `v = sigmoid(x)`.
///
/// Neurons already hold their activation after a forward pass, so the
/// pre-activation never needs to be kept around.
pub fn sigmoid_derivative(v: f64) -> f64 {
    v * (1.0 - v)
}
