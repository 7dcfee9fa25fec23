//! Unified error handling for the storefront.
//!
//! Route handlers return `Result<T, AppError>`; store failures log at
//! ERROR and render as a plain 500 without internal detail. Validation
//! failures never reach this type - they re-render the page with a
//! blocking message instead - and unknown product or line ids are
//! silent no-ops in the repositories, so no 404 path exists here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use calabash_store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// The backing store could not be read or written.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request error");

        // Don't expose internal error details to clients
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
