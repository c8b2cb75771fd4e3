//! Route-subsystem error type.

use thiserror::Error;

/// Errors produced by `fleet-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("invalid coordinate {0:?}: expected \"lat,lon\" in decimal degrees")]
    InvalidCoordinate(String),

    #[error("geometry parse error at row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
