//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! A missing row is reported as `None` or `false`; turning that into a not-found error is
//! the service layer's job.

pub mod article;
pub mod help_request;
pub mod organization;
pub mod user;
