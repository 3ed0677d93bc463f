//! Error types for the cache core
//!
//! Precondition violations and internal invariant breaches, unified via
//! thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type.
///
/// Absence of a key is never an error; every variant here is a programming
/// error at the call site (precondition violation) or a broken internal
/// invariant.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Empty fingerprint passed to get/set
    #[error("Cache key must not be empty")]
    EmptyKey,

    /// Fingerprint exceeds the maximum length
    #[error("Cache key of {0} bytes exceeds maximum length")]
    KeyTooLong(usize),

    /// Non-positive TTL
    #[error("TTL must be positive, got {0} ms")]
    InvalidTtl(u64),

    /// Non-positive cache capacity
    #[error("Cache capacity must be positive")]
    InvalidCapacity,

    /// Non-positive expiry sweep interval
    #[error("Cleanup interval must be positive")]
    InvalidInterval,

    /// Internal invariant breach
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::EmptyKey
            | CacheError::KeyTooLong(_)
            | CacheError::InvalidTtl(_)
            | CacheError::InvalidCapacity
            | CacheError::InvalidInterval => StatusCode::BAD_REQUEST,
            CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache core.
pub type Result<T> = std::result::Result<T, CacheError>;
