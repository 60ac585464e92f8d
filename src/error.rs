use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by the simulator and its input/output layers.
#[derive(Error, Debug)]
pub enum SchedError {
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("invalid input ({} problem(s))", .0.len())]
    InvalidInput(Vec<ValidationError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported workload format: {0}")]
    UnsupportedFormat(String),
}
