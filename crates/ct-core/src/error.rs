//! Workspace base error type.
//!
//! Sub-crates define their own error enums and wrap `CtError` as one variant
//! where core parsing or configuration can fail underneath them.

use thiserror::Error;

/// The top-level error type for `ct-core`.
#[derive(Debug, Error)]
pub enum CtError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("malformed geometry {0:?}")]
    Geometry(String),

    #[error("malformed timestamp {0:?}")]
    Timestamp(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `ct-core`.
pub type CtResult<T> = Result<T, CtError>;
