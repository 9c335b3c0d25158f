//! Request processing helpers shared by every controller.
//!
//! - `auth` - Role-based authorization guard run at the top of each handler
//! - `session` - Typed access to the authenticated user stored in the session

pub mod auth;
pub mod session;
