//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{EntityNotFoundDto, ErrorDto},
    server::error::{auth::AuthError, config::ConfigError},
};

/// Error type name reported in the body of every 404 produced by a keyed lookup.
pub const ENTITY_NOT_FOUND_TYPE: &str = "EntityNotFoundException";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()`, which always answers 403.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket error while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Query string could not be deserialized into the expected parameters.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),

    /// Request body could not be deserialized into the expected payload.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// No entity of the named type exists for the given key.
    ///
    /// Results in 404 Not Found with a `{type, message}` body.
    ///
    /// # Fields
    /// - `entity` - Entity type name, e.g. `UCSBOrganization`
    /// - `id` - The key that was looked up, rendered as a string
    #[error("{entity} with id {id} not found")]
    EntityNotFound { entity: &'static str, id: String },
}

impl AppError {
    /// Builds an `EntityNotFound` error for the given entity type and key.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::EntityNotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For query string and body extractor rejections
/// - 403 Forbidden - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 404 Not Found - For `EntityNotFound`, with a `{type, message}` body
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            err @ Self::EntityNotFound { .. } => (
                StatusCode::NOT_FOUND,
                Json(EntityNotFoundDto {
                    error_type: ENTITY_NOT_FOUND_TYPE.to_string(),
                    message: err.to_string(),
                }),
            )
                .into_response(),
            Self::QueryRejection(rejection) => bad_request_from(rejection.body_text()),
            Self::JsonRejection(rejection) => bad_request_from(rejection.body_text()),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn bad_request_from(message: String) -> Response {
    tracing::debug!("Rejected malformed request: {}", message);

    (StatusCode::BAD_REQUEST, Json(ErrorDto { error: message })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
