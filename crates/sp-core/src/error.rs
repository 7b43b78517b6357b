//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `From`.

use thiserror::Error;

/// Errors raised by `sp-core` string conversions.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown transport mode {0:?}")]
    UnknownMode(String),
}

/// Shorthand result type for `sp-core`.
pub type CoreResult<T> = Result<T, CoreError>;
