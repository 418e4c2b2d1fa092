use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::model::perceptron::Perceptron;
use crate::train::train_config::TrainConfig;

/// Serializable perceptron configuration.
///
/// Stored separately from any weights so that a run can be described in a
/// JSON file before it starts. `max_epochs` is omitted (or `null`) for the
/// unbounded train-until-fixed-point behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerceptronSpec {
    pub dimension: usize,
    pub num_classes: usize,
    pub learning_rate: f64,
    pub theta: f64,
    #[serde(default)]
    pub max_epochs: Option<usize>,
}

impl PerceptronSpec {
    pub fn new(dimension: usize, num_classes: usize, learning_rate: f64, theta: f64) -> Self {
        PerceptronSpec {
            dimension,
            num_classes,
            learning_rate,
            theta,
            max_epochs: None,
        }
    }

    pub fn with_max_epochs(mut self, max_epochs: usize) -> Self {
        self.max_epochs = Some(max_epochs);
        self
    }

    /// Builds a fresh, zero-initialized model.
    pub fn build(&self) -> Result<Perceptron> {
        Perceptron::new(self.dimension, self.num_classes, self.learning_rate, self.theta)
    }

    pub fn train_config(&self) -> TrainConfig {
        TrainConfig::new(self.max_epochs)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `PerceptronSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<PerceptronSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}
