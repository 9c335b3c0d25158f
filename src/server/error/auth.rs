use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the caller's session.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a user ID that has no database record.
    #[error("User {0} from session was not found in the database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but lacks a role the operation requires.
    ///
    /// # Fields
    /// - User ID of the caller
    /// - Description of the missing role, for server-side logs
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant answers 403 Forbidden with an empty body so that unauthenticated and
/// under-privileged callers are indistinguishable to the client. The reason is logged
/// at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        StatusCode::FORBIDDEN.into_response()
    }
}
