//! Request and response DTOs exposed over the HTTP API.
//!
//! These types define the JSON wire format. Field names are camelCase on the wire and
//! every DTO derives `ToSchema` so it appears in the generated OpenAPI document.

pub mod api;
pub mod article;
pub mod help_request;
pub mod organization;
pub mod user;
