use std::fmt;

use serde::Serialize;

use crate::activation::activation::ThresholdActivation;
use crate::data::dataset::Dataset;
use crate::error::{PerceptronError, Result};
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;
use crate::train::TrainReport;

/// Single-layer perceptron with one neuron per class.
///
/// Weights start at zero and are only ever mutated by the training loop.
#[derive(Debug, Clone, Serialize)]
pub struct Perceptron {
    dimension: usize,
    num_classes: usize,
    learning_rate: f64,
    activator: ThresholdActivation,
    /// `num_classes` rows of `dimension` weights.
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
}

impl Perceptron {
    pub fn new(
        dimension: usize,
        num_classes: usize,
        learning_rate: f64,
        theta: f64,
    ) -> Result<Perceptron> {
        if dimension == 0 {
            return Err(PerceptronError::InvalidConfig("dimension must be at least 1"));
        }
        if num_classes == 0 {
            return Err(PerceptronError::InvalidConfig("num_classes must be at least 1"));
        }

        Ok(Perceptron {
            dimension,
            num_classes,
            learning_rate,
            activator: ThresholdActivation::new(theta),
            weights: vec![vec![0.0; dimension]; num_classes],
            biases: vec![0.0; num_classes],
        })
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn theta(&self) -> f64 {
        self.activator.theta
    }

    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    pub fn biases(&self) -> &[f64] {
        &self.biases
    }

    /// `dot(sample, weights[class]) + biases[class]`.
    pub fn net_input(&self, sample: &[i32], class: usize) -> Result<f64> {
        self.check_sample(sample)?;
        self.check_class(class)?;
        Ok(self.net(sample, class))
    }

    /// Output of a single class neuron, one of `-1`, `0` or `1`.
    pub fn activate(&self, sample: &[i32], class: usize) -> Result<i32> {
        Ok(self.activator.function(self.net_input(sample, class)?))
    }

    /// Per-class outputs for one sample. Never mutates the model.
    pub fn predict(&self, sample: &[i32]) -> Result<Vec<i32>> {
        self.check_sample(sample)?;
        Ok(self.outputs(sample))
    }

    /// Trains until an epoch passes with no updates. There is no epoch cap:
    /// data that is not separable under the update rule never returns.
    /// Use [`train_loop`] with `TrainConfig::max_epochs` to bound it.
    pub fn train(&mut self, dataset: &Dataset) -> Result<TrainReport> {
        train_loop(self, dataset, &TrainConfig::unbounded())
    }

    /// Human-readable dump of every neuron's weights and bias.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Same state as [`describe`](Self::describe), rendered as pretty JSON.
    /// Output only: a model cannot be read back from it.
    ///
    /// ```compile_fail
    /// let _: ferrite_perceptron::Perceptron = serde_json::from_str("{}").unwrap();
    /// ```
    pub fn describe_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub(crate) fn check_sample(&self, sample: &[i32]) -> Result<()> {
        if sample.len() != self.dimension {
            return Err(PerceptronError::DimensionMismatch {
                what: "sample length",
                got: sample.len(),
                expected: self.dimension,
            });
        }
        Ok(())
    }

    fn check_class(&self, class: usize) -> Result<()> {
        if class >= self.num_classes {
            return Err(PerceptronError::ClassOutOfRange {
                class,
                num_classes: self.num_classes,
            });
        }
        Ok(())
    }

    /// Unchecked net input; callers have validated `sample` and `class`.
    fn net(&self, sample: &[i32], class: usize) -> f64 {
        self.weights[class]
            .iter()
            .zip(sample.iter())
            .fold(self.biases[class], |acc, (w, &x)| acc + w * x as f64)
    }

    fn outputs(&self, sample: &[i32]) -> Vec<i32> {
        (0..self.num_classes)
            .map(|class| self.activator.function(self.net(sample, class)))
            .collect()
    }

    /// Presents one sample: computes every class output first, then applies
    /// the update rule per class. Returns how many classes were updated.
    pub(crate) fn step(&mut self, sample: &[i32], target: &[i32]) -> usize {
        let outputs = self.outputs(sample);
        let mut updated = 0;
        for (class, (&output, &expected)) in outputs.iter().zip(target.iter()).enumerate() {
            if self.update_class(class, sample, expected, output) {
                updated += 1;
            }
        }
        updated
    }

    /// Perceptron rule keyed on the target: `w += lr * t * x`, `b += lr * t`.
    /// A zero target or a zero learning rate never updates.
    fn update_class(&mut self, class: usize, sample: &[i32], target: i32, output: i32) -> bool {
        if output == target || self.learning_rate == 0.0 || target == 0 {
            return false;
        }

        let scale = self.learning_rate * target as f64;
        for (w, &x) in self.weights[class].iter_mut().zip(sample.iter()) {
            *w += scale * x as f64;
        }
        self.biases[class] += scale;
        true
    }
}

impl fmt::Display for Perceptron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (weights, bias)) in self.weights.iter().zip(self.biases.iter()).enumerate() {
            writeln!(f, "Neuron {}:", i + 1)?;
            let joined: Vec<String> = weights.iter().map(|w| w.to_string()).collect();
            writeln!(f, "Weights: {}", joined.join(", "))?;
            writeln!(f, "Bias weight: {bias}")?;
        }
        Ok(())
    }
}
