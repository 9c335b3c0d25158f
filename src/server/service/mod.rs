//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Not-found translation**: Turning a missing row into `AppError::EntityNotFound`
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Messages**: Producing the confirmation text returned by delete operations

pub mod article;
pub mod help_request;
pub mod organization;
pub mod user;

#[cfg(test)]
mod test;

/// Confirmation message returned after deleting the entity stored under `id`.
pub fn deleted_message(entity: &str, id: impl std::fmt::Display) -> String {
    format!("{} with id {} deleted", entity, id)
}
