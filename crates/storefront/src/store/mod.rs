//! Record store REST API client.
//!
//! The record store is an external collaborator that persists `Product`
//! entities. The storefront holds no local copy: every operation here is a
//! single HTTP exchange with JSON payloads.
//!
//! # Operations
//!
//! - `list` - GET `/api/products`
//! - `get` - GET `/api/products/{id}`
//! - `create` - POST `/api/products`
//! - `replace` - PUT `/api/products/{id}` (full replace, all fields)
//! - `delete` - DELETE `/api/products/{id}`

mod client;

pub use client::StoreClient;

use thiserror::Error;

/// Errors that can occur when talking to the record store.
///
/// Any non-success status is a uniform failure. The status code is kept for
/// log lines only; callers do not branch on it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The HTTP exchange itself failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The record store answered with a non-success status.
    #[error("record store returned status {status}")]
    Status {
        /// HTTP status code of the failed response.
        status: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = StoreError::Status { status: 404 };
        assert_eq!(err.to_string(), "record store returned status 404");
    }
}
