use std::path::PathBuf;

use ninterp::error::{InterpolateError, ValidateError};
use thiserror::Error;

/// Errors raised while loading or evaluating an open-circuit potential curve.
///
/// Load errors are fatal: no simulation can run against a table that failed
/// to load.
#[derive(Error, Debug)]
pub enum OcpError {
    #[error("failed to read OCP table {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected two numeric columns, found `{content}`")]
    Malformed { line: usize, content: String },

    #[error("line {line}: value is not finite")]
    NonFinite { line: usize },

    #[error("table has {found} data rows, at least 2 are required to interpolate")]
    TooFewPoints { found: usize },

    #[error("line {line}: state of charge {x} does not increase past {previous}")]
    NotIncreasing { line: usize, previous: f64, x: f64 },

    #[error("state of charge is not a number")]
    NotANumber,

    #[error("invalid extrapolation policy `{0}`")]
    InvalidPolicy(String),

    #[error(transparent)]
    Validation(#[from] ValidateError),

    #[error(transparent)]
    Interpolation(#[from] InterpolateError),
}
