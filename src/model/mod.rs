pub mod perceptron;
pub mod spec;

pub use perceptron::Perceptron;
pub use spec::PerceptronSpec;
