pub mod evaluate;
pub mod iteration_stats;
pub mod loop_fn;
pub mod train_config;

pub use evaluate::{evaluate, Evaluation};
pub use iteration_stats::IterationStats;
pub use loop_fn::train_loop;
pub use train_config::TrainConfig;
