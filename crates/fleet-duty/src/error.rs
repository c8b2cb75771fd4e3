//! Scheduling error type.

use thiserror::Error;

/// Errors produced by `fleet-duty`.
#[derive(Debug, Error)]
pub enum DutyError {
    #[error("invalid start time {0:?}: expected \"YYYY-MM-DD HH:MM[:SS]\" or \"YYYY-MM-DD\"")]
    InvalidStartTime(String),

    #[error("timestamp out of range: {0}")]
    OutOfRange(String),
}

pub type DutyResult<T> = Result<T, DutyError>;
