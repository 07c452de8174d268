use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no caller identity header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing the caller identity")]
    MissingIdentity,

    /// The caller identity does not resolve to a known user.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} not found")]
    UnknownUser(i32),

    /// The caller is known but may not perform the action.
    ///
    /// Results in a 403 Forbidden response carrying the message.
    #[error("{0}")]
    Forbidden(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingIdentity` / `UnknownUser` → 401 Unauthorized with "Authentication required"
/// - `Forbidden` → 403 Forbidden with the error message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingIdentity | Self::UnknownUser(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
        }
    }
}
