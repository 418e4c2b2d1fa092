pub mod activation;

pub use activation::ThresholdActivation;
