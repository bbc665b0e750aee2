// Command-line front end: trains the built-in pattern task and writes
// network configs. Reading training data from files is left to callers of
// the library.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use momentum_net::{evaluate, train_loop, Network, NetworkSpec, TrainConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "momentum-net")]
#[command(about = "Three-layer sigmoid network trained with momentum backpropagation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on [0,0,0,0] -> 1 and [1,1,1,1] -> 0 and report the result
    Demo {
        /// Network config (JSON); the pattern task needs 4 inputs and 1 output
        #[arg(short, long)]
        config: Option<String>,

        /// Hidden layer size when no config is given
        #[arg(long, default_value = "4")]
        hidden: usize,

        /// Learning rate, overrides the config
        #[arg(long)]
        learn_rate: Option<f64>,

        /// Momentum, overrides the config
        #[arg(long)]
        momentum: Option<f64>,

        /// Passes over the two patterns
        #[arg(short, long, default_value = "5000")]
        iterations: usize,

        /// Seed for weight initialisation
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },

    /// Write the default network config to a JSON file
    InitConfig {
        /// Destination path
        path: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    match cli.command {
        Commands::Demo { config, hidden, learn_rate, momentum, iterations, seed } => {
            let spec = demo_spec(config.as_deref(), hidden, learn_rate, momentum)?;
            run_demo(&spec, iterations, seed)?;
        }
        Commands::InitConfig { path } => {
            NetworkSpec::default()
                .save_json(&path)
                .with_context(|| format!("failed to write config {path}"))?;
            info!(path = %path, "wrote default config");
        }
    }

    Ok(())
}

/// Resolves the network for `demo`: the config file if given, otherwise a
/// 4/`hidden`/1 network; explicit hyperparameter flags override either.
fn demo_spec(
    config: Option<&str>,
    hidden: usize,
    learn_rate: Option<f64>,
    momentum: Option<f64>,
) -> Result<NetworkSpec> {
    let mut spec = match config {
        Some(path) => NetworkSpec::load_json(path)
            .with_context(|| format!("failed to load config {path}"))?,
        None => NetworkSpec::new(4, hidden, 1),
    };
    if let Some(lr) = learn_rate {
        spec.learn_rate = lr;
    }
    if let Some(m) = momentum {
        spec.momentum = m;
    }
    Ok(spec)
}

fn run_demo(spec: &NetworkSpec, iterations: usize, seed: u64) -> Result<()> {
    let mut network = Network::with_seed(spec, seed).context("invalid network config")?;

    let inputs = vec![vec![0.0; 4], vec![1.0; 4]];
    let labels = vec![vec![1.0], vec![0.0]];

    info!(iterations, seed, "training network");
    let config = TrainConfig::new(iterations);
    let last_error = train_loop(&mut network, &inputs, &labels, &config)
        .context("training failed")?;
    info!(last_error, "training finished");

    let results = evaluate(&mut network, &inputs, &labels)?;
    for ((input, label), result) in inputs.iter().zip(&labels).zip(results) {
        println!(
            "{:?} = {} = {:.5}, Error = {:.5}",
            input, label[0], result.outputs[0], result.error
        );
    }
    Ok(())
}
