//! Unified error handling for the storefront API.
//!
//! Provides a unified `AppError` type returned by all route handlers.
//! Responses carry a JSON body of the shape `{"error": "..."}`; internal
//! details are logged but never exposed to clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use boles_core::WalletError;

use crate::db::DbError;
use crate::services::email::EmailError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Table API operation failed.
    #[error("Table API error: {0}")]
    Db(#[from] DbError),

    /// Email dispatch failed.
    #[error("Email error: {0}")]
    Email(#[from] EmailError),

    /// Wallet mutation rejected (insufficient balance, bad amount).
    #[error("{0}")]
    Wallet(#[from] WalletError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User is authenticated but lacks the required role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Db(_) | Self::Email(_) | Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Db(_) | Self::Email(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Wallet rejections are client-facing validation failures
            Self::Wallet(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Db(_) | Self::Email(_) => "External service error".to_owned(),
            Self::Internal(_) => "Internal server error".to_owned(),
            _ => self.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product smart-bulb".to_owned());
        assert_eq!(err.to_string(), "Not found: product smart-bulb");

        let err = AppError::BadRequest("cart is empty".to_owned());
        assert_eq!(err.to_string(), "Bad request: cart is empty");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::NotFound("x".to_owned())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Unauthorized("x".to_owned())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Forbidden("x".to_owned())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::BadRequest("x".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("x".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_wallet_errors_are_client_errors() {
        let err = AppError::Wallet(WalletError::InsufficientBalance {
            balance: Decimal::new(12_000, 2),
            required: Decimal::new(15_000, 2),
        });
        assert_eq!(get_status(err), StatusCode::BAD_REQUEST);
    }
}
