//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `FleetError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `fleet-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("sample interval must be a positive number of seconds, got {0}")]
    InvalidInterval(i64),

    #[error("unknown speed profile {0:?}: expected \"eco\", \"normal\", or \"aggressive\"")]
    UnknownProfile(String),

    #[error("unknown event kind {0:?}")]
    UnknownEvent(String),
}

/// Shorthand result type for all `fleet-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;
