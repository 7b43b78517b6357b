//! Network-subsystem error type.

use thiserror::Error;

/// Errors produced by `sp-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("node parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
