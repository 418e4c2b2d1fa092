use serde::{Serialize, Deserialize};

/// Three-way step function with a dead zone between `theta - 1` and `theta`.
///
/// | net input               | output |
/// |-------------------------|--------|
/// | `net > theta`           | `1`    |
/// | `theta - 1 <= net <= theta` | `0` |
/// | `net < theta - 1`       | `-1`   |
///
/// The upper bound is strict and the lower bound inclusive, so a net input
/// sitting exactly on either threshold lands in the dead zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdActivation {
    pub theta: f64,
}

impl ThresholdActivation {
    pub fn new(theta: f64) -> ThresholdActivation {
        ThresholdActivation { theta }
    }

    pub fn function(&self, net: f64) -> i32 {
        if net > self.theta {
            1
        } else if net >= self.theta - 1.0 {
            0
        } else {
            -1
        }
    }
}
