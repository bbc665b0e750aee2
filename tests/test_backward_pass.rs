// Backpropagation: error reduction and the end-to-end pattern task.

use approx::assert_abs_diff_eq;
use momentum_net::{LayerKind, Network, NetworkError, NetworkSpec};

#[test]
fn test_error_decreases_over_repeated_updates() {
    let mut net = Network::with_seed(&NetworkSpec::new(3, 5, 2), 21).unwrap();
    let input = [0.2, 0.8, 0.5];
    let target = [0.9, 0.1];

    net.train(&input).unwrap();
    let initial = net.calculate_error(&target).unwrap();

    for _ in 0..2000 {
        net.train(&input).unwrap();
        net.back_propagate(&target).unwrap();
    }
    net.compute(&input).unwrap();
    let trained = net.calculate_error(&target).unwrap();

    assert!(trained < initial, "{trained} !< {initial}");
    assert!(trained < 0.05);
}

#[test]
fn test_calculate_error_is_sum_of_absolute_differences() {
    let mut net = Network::with_seed(&NetworkSpec::new(2, 2, 3), 8).unwrap();
    let out = net.compute(&[0.4, 0.6]).unwrap();
    let target = [1.0, 0.0, 0.5];
    let expected: f64 = out.iter().zip(target).map(|(o, t)| (t - o).abs()).sum();
    assert_eq!(net.calculate_error(&target).unwrap(), expected);
}

#[test]
fn test_calculate_error_has_no_side_effects() {
    let mut net = Network::with_seed(&NetworkSpec::new(2, 2, 1), 8).unwrap();
    net.train(&[0.4, 0.6]).unwrap();
    let before = net.clone();
    net.calculate_error(&[1.0]).unwrap();
    assert_eq!(net.synapses(), before.synapses());
    assert_eq!(net.values(LayerKind::Output), before.values(LayerKind::Output));
}

#[test]
fn test_momentum_carries_previous_delta() {
    let spec = NetworkSpec::new(2, 2, 1).with_learn_rate(0.5).with_momentum(0.3);
    let mut net = Network::with_seed(&spec, 30).unwrap();
    let input = [1.0, 0.0];

    net.train(&input).unwrap();
    net.back_propagate(&[1.0]).unwrap();

    let out_id = net.layer_ids(LayerKind::Output)[0];
    let out = net.neuron(out_id).unwrap().clone();
    let s_id = out.inputs[0];
    let first = net.synapse(s_id).unwrap().clone();

    net.train(&input).unwrap();
    let source_value = net.neuron(first.source).unwrap().value;
    net.back_propagate(&[1.0]).unwrap();

    let g2 = net.neuron(out_id).unwrap().gradient;
    let eta = net.learn_rate();
    let mu = net.momentum();

    let second = net.synapse(s_id).unwrap();
    assert_abs_diff_eq!(
        second.weight,
        first.weight + eta * g2 * source_value + mu * first.weight_delta,
        epsilon = 1e-15
    );
    assert_abs_diff_eq!(second.weight_delta, eta * g2 * source_value, epsilon = 1e-15);

    let bias_after = net.neuron(out_id).unwrap();
    assert_abs_diff_eq!(
        bias_after.bias,
        out.bias + eta * g2 + mu * out.bias_delta,
        epsilon = 1e-15
    );
    assert_abs_diff_eq!(bias_after.bias_delta, eta * g2, epsilon = 1e-15);
    assert!(first.weight_delta != 0.0 && out.bias_delta != 0.0);
}

#[test]
fn test_back_propagate_rejects_wrong_target_length() {
    let mut net = Network::with_seed(&NetworkSpec::new(4, 4, 1), 0).unwrap();
    net.train(&[0.0; 4]).unwrap();
    let before = net.clone();
    let err = net.back_propagate(&[1.0, 0.0]).unwrap_err();
    assert!(matches!(err, NetworkError::TargetSizeMismatch { expected: 1, actual: 2 }));
    assert_eq!(net.synapses(), before.synapses());
}

#[test]
fn test_pattern_task_converges() {
    for seed in [0, 1, 2] {
        let mut net = Network::with_seed(&NetworkSpec::new(4, 4, 1), seed).unwrap();
        for _ in 0..5000 {
            net.train(&[0.0; 4]).unwrap();
            net.back_propagate(&[1.0]).unwrap();
            net.train(&[1.0; 4]).unwrap();
            net.back_propagate(&[0.0]).unwrap();
        }
        let zeros = net.compute(&[0.0; 4]).unwrap()[0];
        let ones = net.compute(&[1.0; 4]).unwrap()[0];
        assert!((zeros - 1.0).abs() < 0.1, "seed {seed}: {zeros}");
        assert!(ones.abs() < 0.1, "seed {seed}: {ones}");
    }
}
