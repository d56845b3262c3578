use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Password verification failed for an existing manager.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid password")]
    InvalidCredentials,

    /// Authorization header absent or not of the form `Bearer <token>`.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// Bearer token failed signature or expiry validation.
    ///
    /// Results in a 401 Unauthorized response. The underlying validation
    /// detail is logged at debug level and never returned to the client.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Token was valid but the manager it names no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token does not belong to a known manager: {0}")]
    UnknownManager(String),
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized; messages stay generic on purpose so
/// a caller cannot distinguish a revoked token from a forged one.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::InvalidCredentials => "Invalid password".to_string(),
            Self::MissingToken => "Missing bearer token".to_string(),
            Self::InvalidToken | Self::UnknownManager(_) => {
                tracing::debug!("Rejected bearer token: {}", self);
                "Invalid or expired token".to_string()
            }
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto { message })).into_response()
    }
}
