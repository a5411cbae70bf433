//! Typed error type for the api crate.

use thiserror::Error;

/// Errors from binding or running the HTTP server.
///
/// Handler-level failures never surface here; they are collapsed to
/// status codes inside the handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
