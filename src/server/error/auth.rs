use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::{api::ErrorDto, auth::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No account of the given role carries the supplied identifier.
    ///
    /// Results in a 404 Not Found response such as "Student not found".
    #[error("No {role} account with identifier '{id}'")]
    AccountNotFound { role: Role, id: String },

    /// The account exists but the supplied secret does not match its stored hash.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Secret mismatch for {role} '{id}'")]
    InvalidCredentials { role: Role, id: String },

    /// The request carries no authenticated identity.
    #[error("No authenticated identity in session")]
    NotInSession,

    /// The stored identity could not be read back or failed validation.
    ///
    /// The session is cleared before this error is returned.
    #[error("Session identity failed validation: {0}")]
    InvalidSession(String),

    /// The identity is older than the configured absolute session lifetime.
    #[error("Session for {role} '{id}' exceeded its maximum age")]
    SessionExpired { role: Role, id: String },

    /// An authenticated identity tried to reach another role's resource.
    ///
    /// Results in a 403 Forbidden response.
    #[error("{actual} '{id}' attempted to access a {required} resource")]
    AccessDenied {
        required: Role,
        actual: Role,
        id: String,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to status codes and short client-facing messages:
/// - `AccountNotFound` → 404 Not Found with "<Role> not found"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `NotInSession` / `InvalidSession` / `SessionExpired` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level with the identifier involved; the client-facing
/// messages never echo identifiers or secrets.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::AccountNotFound { role, .. } => {
                (StatusCode::NOT_FOUND, format!("{} not found", role.title()))
            }
            Self::InvalidCredentials { .. } => {
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            Self::NotInSession => (StatusCode::UNAUTHORIZED, "Please login first".to_string()),
            Self::InvalidSession(_) => (
                StatusCode::UNAUTHORIZED,
                "Invalid session, please login again".to_string(),
            ),
            Self::SessionExpired { .. } => (
                StatusCode::UNAUTHORIZED,
                "Session expired, please login again".to_string(),
            ),
            Self::AccessDenied { .. } => (StatusCode::FORBIDDEN, "Access denied".to_string()),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
