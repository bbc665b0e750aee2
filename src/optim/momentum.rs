/// Gradient descent with a momentum term.
///
/// Every trainable parameter (a bias or a synapse weight) carries the delta it
/// received on the previous step; a fraction `momentum` of that delta is added
/// on top of the fresh gradient step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumSgd {
    pub learn_rate: f64,
    pub momentum: f64,
}

impl MomentumSgd {
    pub fn new(learn_rate: f64, momentum: f64) -> MomentumSgd {
        MomentumSgd { learn_rate, momentum }
    }

    /// Applies one update to `param`.
    ///
    /// `gradient_term` is the neuron gradient times the value on the far end of
    /// the parameter (1.0 for a bias). The new delta is computed before the old
    /// one is read back, then `param += new + momentum * old` and `previous_delta`
    /// is replaced by `new`.
    pub fn step(&self, param: &mut f64, previous_delta: &mut f64, gradient_term: f64) {
        let delta = self.learn_rate * gradient_term;
        *param += delta + self.momentum * *previous_delta;
        *previous_delta = delta;
    }
}
