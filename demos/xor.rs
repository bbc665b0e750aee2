use momentum_net::{evaluate, train_loop, Network, NetworkSpec, TrainConfig};

fn main() -> momentum_net::Result<()> {
    tracing_subscriber::fmt().init();

    let spec = NetworkSpec::new(2, 3, 1).with_learn_rate(0.5).with_momentum(0.04);
    let mut network = Network::with_seed(&spec, 42)?;

    let inputs = vec![
        vec![1.0, 0.0],
        vec![1.0, 1.0],
        vec![0.0, 1.0],
        vec![0.0, 0.0],
    ];
    let expected_outputs = vec![
        vec![1.0],
        vec![0.0],
        vec![1.0],
        vec![0.0],
    ];

    let config = TrainConfig::new(10000).with_log_every(1000);
    train_loop(&mut network, &inputs, &expected_outputs, &config)?;

    for (input, eval) in inputs.iter().zip(evaluate(&mut network, &inputs, &expected_outputs)?) {
        println!("Input: {:?} -> Output: {:.4} (error {:.4})", input, eval.outputs[0], eval.error);
    }
    Ok(())
}
