//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type wrapping domain-specific errors and
//! implementing `IntoResponse` for automatic error handling in API endpoints.
//! Recoverable failures (missing resources, duplicate business keys, bad
//! credentials) map to fixed status codes with a structured message; anything
//! unexpected is logged server-side and surfaces as a generic 500.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure; delegates to `AuthError::into_response()`
    /// for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM. Results in 500 with the
    /// detail logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Password hashing error. Results in 500 with the detail logged
    /// server-side.
    #[error(transparent)]
    BcryptErr(#[from] bcrypt::BcryptError),

    /// I/O error during startup (e.g. binding the listen socket).
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Missing business-key lookup. Results in 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// Duplicate business key on create. Results in 409 with the given
    /// message; the existing record is never overwritten.
    #[error("{0}")]
    Conflict(String),

    /// Malformed or missing required input, rejected at the boundary before
    /// reaching the core. Results in 400 with the given message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message. The message is logged but
    /// a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else, with full detail
///   logged internally and a generic message returned
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { message: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { message: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { message: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        message: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic message
/// to the client, withholding internal detail.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
