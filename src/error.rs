use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, PerceptronError>;

/// Everything that can go wrong while building, feeding or training a perceptron.
#[derive(Debug)]
pub enum PerceptronError {
    /// A configuration value is outside its legal range (e.g. zero classes).
    InvalidConfig(&'static str),
    /// Two shapes that must agree do not.
    DimensionMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A class index past the last output neuron.
    ClassOutOfRange { class: usize, num_classes: usize },
    /// A CSV field could not be read as an integer.
    Parse {
        line: usize,
        column: usize,
        field: String,
    },
    /// The epoch cap was reached while updates were still happening.
    NotConverged { epochs: usize },
    Io(io::Error),
    Json(serde_json::Error),
}

impl Display for PerceptronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptronError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            PerceptronError::DimensionMismatch { what, got, expected } => write!(
                f,
                "dimension mismatch in {what}: got {got}, expected {expected}"
            ),
            PerceptronError::ClassOutOfRange { class, num_classes } => write!(
                f,
                "class {class} is out of range for {num_classes} classes"
            ),
            PerceptronError::Parse { line, column, field } => write!(
                f,
                "line {line}, column {column}: '{field}' is not a valid integer"
            ),
            PerceptronError::NotConverged { epochs } => write!(
                f,
                "training did not converge within {epochs} epochs"
            ),
            PerceptronError::Io(e) => write!(f, "io error: {e}"),
            PerceptronError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl Error for PerceptronError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PerceptronError::Io(e) => Some(e),
            PerceptronError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PerceptronError {
    fn from(e: io::Error) -> Self {
        PerceptronError::Io(e)
    }
}

impl From<serde_json::Error> for PerceptronError {
    fn from(e: serde_json::Error) -> Self {
        PerceptronError::Json(e)
    }
}
