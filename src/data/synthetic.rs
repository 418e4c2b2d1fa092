use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::dataset::Dataset;
use crate::error::{PerceptronError, Result};

/// Minimum distance between a sample and a class boundary, as a fraction of
/// that class scorer's Euclidean norm.
const MARGIN_FRACTION: f64 = 0.5;
const MAX_DRAWS_PER_SAMPLE: usize = 10_000;

/// Generates `n` samples of `dimension` features in `{-1, 1}` with one-vs-rest
/// targets over `classes` classes.
///
/// Each class owns a hidden random linear scorer; a sample's target for a class
/// is `1` when that scorer is positive and `-1` otherwise, so every class is
/// linearly separable. A sample is redrawn while its score for any class lies
/// within `MARGIN_FRACTION` of that scorer's norm from zero. The same `seed`
/// always yields the same dataset.
pub fn linearly_separable(
    n: usize,
    dimension: usize,
    classes: usize,
    seed: u64,
) -> Result<Dataset> {
    if dimension == 0 || classes == 0 {
        return Err(PerceptronError::InvalidConfig(
            "synthetic data needs at least one feature and one class",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let scorers: Vec<Vec<f64>> = (0..classes)
        .map(|_| (0..dimension).map(|_| rng.gen_range(-1.0..=1.0)).collect())
        .collect();
    let margins: Vec<f64> = scorers
        .iter()
        .map(|w| MARGIN_FRACTION * w.iter().map(|v| v * v).sum::<f64>().sqrt())
        .collect();

    let mut samples = Vec::with_capacity(n);
    let mut targets = Vec::with_capacity(n);

    for _ in 0..n {
        let mut draws = 0;
        let (sample, target) = loop {
            draws += 1;
            if draws > MAX_DRAWS_PER_SAMPLE {
                return Err(PerceptronError::InvalidConfig(
                    "could not draw a sample clear of every decision boundary",
                ));
            }

            let sample: Vec<i32> = (0..dimension)
                .map(|_| if rng.gen_bool(0.5) { 1 } else { -1 })
                .collect();
            let scores: Vec<f64> = scorers
                .iter()
                .map(|scorer| scorer.iter().zip(&sample).map(|(w, &x)| w * x as f64).sum::<f64>())
                .collect();

            if scores.iter().zip(&margins).all(|(s, m)| s.abs() >= *m && *s != 0.0) {
                let target = scores.iter().map(|&s| if s > 0.0 { 1 } else { -1 }).collect();
                break (sample, target);
            }
        };
        samples.push(sample);
        targets.push(target);
    }

    Dataset::new(samples, targets)
}
