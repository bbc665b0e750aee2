/// Sum of absolute output errors, the metric `Network::calculate_error` reports.
///
/// This is a plain sum over outputs, not a mean.
pub struct AbsoluteErrorSum;

impl AbsoluteErrorSum {
    /// Scalar loss: Σ |expected - predicted|
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (y - p).abs())
            .sum()
    }

    /// Signed per-output error: expected - predicted
    pub fn output_errors(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| y - p)
            .collect()
    }
}
