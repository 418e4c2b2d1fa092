//! CSV loading for perceptron datasets.
//!
//! Supported format:
//! - UTF-8, comma-separated, no header row
//! - The first `n_features` columns of a row are integer features; every
//!   remaining column on that row is an integer label value
//! - A UTF-8 byte-order mark in front of a line's first field is ignored
//! - Blank lines are skipped

use std::path::Path;

use log::debug;

use crate::data::dataset::Dataset;
use crate::error::{PerceptronError, Result};

const BOM: char = '\u{feff}';

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads the file at `path` and parses it with [`parse_csv`].
pub fn load_csv<P: AsRef<Path>>(path: P, n_features: usize) -> Result<Dataset> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let dataset = parse_csv(&text, n_features)?;
    debug!(
        "loaded {} rows from {} ({} features, {} labels)",
        dataset.len(),
        path.display(),
        n_features,
        dataset.label_width().unwrap_or(0)
    );
    Ok(dataset)
}

/// Parses CSV text into a [`Dataset`].
///
/// # Errors
/// - `Parse` naming the line, column and text of the first non-integer field
/// - `DimensionMismatch` if a row has no label column after its `n_features`
///   features, or its label count differs from the first row's
pub fn parse_csv(text: &str, n_features: usize) -> Result<Dataset> {
    let mut samples: Vec<Vec<i32>> = Vec::new();
    let mut targets: Vec<Vec<i32>> = Vec::new();

    for (row_idx, line) in text.lines().enumerate() {
        let line_no = row_idx + 1;
        let line = line.trim_start_matches(BOM).trim();
        if line.is_empty() {
            continue;
        }

        let values = parse_row(line, line_no)?;
        if values.len() <= n_features {
            return Err(PerceptronError::DimensionMismatch {
                what: "csv column count",
                got: values.len(),
                expected: n_features + 1,
            });
        }

        let (features, labels) = values.split_at(n_features);
        if let Some(first) = targets.first() {
            if labels.len() != first.len() {
                return Err(PerceptronError::DimensionMismatch {
                    what: "csv label count",
                    got: labels.len(),
                    expected: first.len(),
                });
            }
        }

        samples.push(features.to_vec());
        targets.push(labels.to_vec());
    }

    Dataset::new(samples, targets)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Splits one line on commas and parses every field as `i32`.
fn parse_row(line: &str, line_no: usize) -> Result<Vec<i32>> {
    line.split(',')
        .enumerate()
        .map(|(col, cell)| {
            let cell = cell.trim_start_matches(BOM).trim();
            cell.parse::<i32>().map_err(|_| PerceptronError::Parse {
                line: line_no,
                column: col + 1,
                field: cell.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_row_reports_offending_column() {
        let err = parse_row("1, 2,x,4", 7).unwrap_err();
        match err {
            PerceptronError::Parse { line, column, field } => {
                assert_eq!(line, 7);
                assert_eq!(column, 3);
                assert_eq!(field, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_row_accepts_negative_values_and_whitespace() {
        assert_eq!(parse_row(" -1 ,0, 1", 1).unwrap(), vec![-1, 0, 1]);
    }
}
