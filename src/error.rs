use thiserror::Error;

/// Top-level error type for the dragon-helpers library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unrecognised date/time string: {0:?}")]
    InvalidDate(String),

    #[error("key path separator must not be empty")]
    EmptySeparator,
}
