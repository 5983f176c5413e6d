use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Everything a signup or login request can fail with. Each variant maps
/// to exactly one status code and one opaque single-line body.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Body could not be parsed into a user record.
    #[error("Invalid Data")]
    InvalidData,

    /// Signup identity (email or username) already taken.
    #[error("User already exists")]
    UserExists,

    /// Login identifier/secret mismatch.
    #[error("Invalid Credentials")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            // Plain text, unlike the other two which are JSON strings.
            AuthError::InvalidData => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            AuthError::UserExists => {
                (StatusCode::CONFLICT, Json(self.to_string())).into_response()
            }
            AuthError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, Json(self.to_string())).into_response()
            }
        }
    }
}
