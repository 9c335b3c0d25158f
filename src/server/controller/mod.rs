//! HTTP request handlers.
//!
//! Every role-gated handler calls `AuthGuard::require` before touching its inputs, so a
//! caller without the required role gets 403 even when the request is also malformed.
//! Query and body extraction is therefore deferred by taking the extractor's `Result`
//! and unwrapping it with `?` after the guard has passed.

pub mod article;
pub mod health;
pub mod help_request;
pub mod organization;
pub mod user;

#[cfg(test)]
mod test;
