//! Errors for the fallible edges of the crate
//!
//! The per-step kernel is total and never returns an error. Only start-up
//! work (reading configuration, placing the initial population) can fail.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of range or non-finite.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Rejection sampling ran out of attempts before the population was placed.
    #[error("could only place {placed} of {requested} bodies without overlap")]
    Placement { placed: usize, requested: usize },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
