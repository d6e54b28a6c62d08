//! Errors raised around the behaviors: configuration and host bindings.
//!
//! The behaviors themselves never fail. A missing element means the
//! corresponding effect is skipped.

use thiserror::Error;

pub type FolioResult<T> = Result<T, FolioError>;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No global window")]
    NoWindow,

    #[error("No document on window")]
    NoDocument,

    #[error("JS call failed: {0}")]
    Js(String),
}
