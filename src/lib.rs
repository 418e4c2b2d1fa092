pub mod activation;
pub mod data;
pub mod error;
pub mod model;
pub mod train;

// Convenience re-exports
pub use activation::activation::ThresholdActivation;
pub use data::dataset::Dataset;
pub use error::{PerceptronError, Result};
pub use model::perceptron::Perceptron;
pub use model::spec::PerceptronSpec;
pub use train::{train_loop, EpochStats, TrainConfig, TrainReport};
