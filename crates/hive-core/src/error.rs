//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `HiveError` as one
//! variant via `From`.

use thiserror::Error;

/// The top-level error type for `hive-core`.
#[derive(Debug, Error)]
pub enum HiveError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `hive-core`.
pub type HiveResult<T> = Result<T, HiveError>;
