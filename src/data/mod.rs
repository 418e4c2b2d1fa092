pub mod csv;
pub mod dataset;
pub mod synthetic;

pub use csv::{load_csv, parse_csv};
pub use dataset::Dataset;
