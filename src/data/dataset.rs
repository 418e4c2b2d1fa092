use crate::error::{PerceptronError, Result};

/// Ordered (sample, target) pairs kept as two parallel vectors.
///
/// Samples hold `D` integer features each; targets hold one value per class,
/// each in `{-1, 0, 1}` where `0` means "no update for this class".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<Vec<i32>>,
    targets: Vec<Vec<i32>>,
}

impl Dataset {
    /// Pairs `samples` with `targets`; both must have the same length.
    pub fn new(samples: Vec<Vec<i32>>, targets: Vec<Vec<i32>>) -> Result<Dataset> {
        if samples.len() != targets.len() {
            return Err(PerceptronError::DimensionMismatch {
                what: "target count",
                got: targets.len(),
                expected: samples.len(),
            });
        }
        Ok(Dataset { samples, targets })
    }

    pub fn samples(&self) -> &[Vec<i32>] {
        &self.samples
    }

    pub fn targets(&self) -> &[Vec<i32>] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Width of the first target row, i.e. the class count implied by the data.
    pub fn label_width(&self) -> Option<usize> {
        self.targets.first().map(Vec::len)
    }

    /// Width of the first sample row.
    pub fn feature_width(&self) -> Option<usize> {
        self.samples.first().map(Vec::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[i32], &[i32])> {
        self.samples
            .iter()
            .zip(self.targets.iter())
            .map(|(s, t)| (s.as_slice(), t.as_slice()))
    }

    /// Checks every row against a model of `dimension` inputs and `num_classes` outputs.
    pub fn validate(&self, dimension: usize, num_classes: usize) -> Result<()> {
        for (sample, target) in self.iter() {
            if sample.len() != dimension {
                return Err(PerceptronError::DimensionMismatch {
                    what: "sample length",
                    got: sample.len(),
                    expected: dimension,
                });
            }
            if target.len() != num_classes {
                return Err(PerceptronError::DimensionMismatch {
                    what: "target length",
                    got: target.len(),
                    expected: num_classes,
                });
            }
        }
        Ok(())
    }
}
