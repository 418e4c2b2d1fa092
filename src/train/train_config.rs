use std::sync::mpsc;
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `max_epochs`  — upper bound on full passes over the data; `None` keeps
///                   going until an epoch makes no updates, however long that takes
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch.  A dropped receiver is ignored.
#[derive(Debug, Default)]
pub struct TrainConfig {
    pub max_epochs: Option<usize>,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(max_epochs: Option<usize>) -> Self {
        TrainConfig {
            max_epochs,
            progress_tx: None,
        }
    }

    /// Train until fixed point, no cap.
    pub fn unbounded() -> Self {
        TrainConfig::new(None)
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<EpochStats>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}
