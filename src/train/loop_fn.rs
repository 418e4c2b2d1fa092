use std::time::Instant;

use log::{debug, info, warn};

use crate::data::dataset::Dataset;
use crate::error::{PerceptronError, Result};
use crate::model::perceptron::Perceptron;
use crate::train::epoch_stats::{EpochStats, TrainReport};
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Runs full epochs over `dataset` until one of them makes no update.
///
/// The dataset is checked against the model's shape before the first epoch,
/// so a `DimensionMismatch` leaves the weights untouched.
///
/// # Errors
/// - `InvalidConfig` if `config.max_epochs` is `Some(0)`
/// - `DimensionMismatch` if a sample or target row has the wrong width
/// - `NotConverged` if `config.max_epochs` epochs all made updates; the model
///   keeps the weights reached so far
pub fn train_loop(
    model: &mut Perceptron,
    dataset: &Dataset,
    config: &TrainConfig,
) -> Result<TrainReport> {
    if config.max_epochs == Some(0) {
        return Err(PerceptronError::InvalidConfig("max_epochs must be at least 1"));
    }
    dataset.validate(model.dimension(), model.num_classes())?;

    let mut total_updates = 0;
    let mut epoch = 0;

    loop {
        if let Some(cap) = config.max_epochs {
            if epoch >= cap {
                warn!("no fixed point after {cap} epochs ({total_updates} updates)");
                return Err(PerceptronError::NotConverged { epochs: cap });
            }
        }
        epoch += 1;

        let t_start = Instant::now();
        let updates = run_one_epoch(model, dataset);
        total_updates += updates;
        let elapsed_ms = t_start.elapsed().as_millis() as u64;

        debug!("epoch {epoch}: {updates} updates in {elapsed_ms} ms");

        if let Some(ref tx) = config.progress_tx {
            // A closed receiver only stops reporting, never training.
            let _ = tx.send(EpochStats { epoch, updates, elapsed_ms });
        }

        if updates == 0 {
            info!("converged after {epoch} epochs ({total_updates} updates)");
            return Ok(TrainReport {
                epochs: epoch,
                updates: total_updates,
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass over the data in order. Returns the number of corrections made.
fn run_one_epoch(model: &mut Perceptron, dataset: &Dataset) -> usize {
    dataset
        .iter()
        .map(|(sample, target)| model.step(sample, target))
        .sum()
}
