//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let admin = factory::user::UserFactory::new(&db).admin(true).build().await?;
//!     let article = factory::articles::create_article(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `articles` - Create article entities
//! - `help_request` - Create help request entities
//! - `ucsb_organization` - Create organization entities
//! - `helpers` - Unique value generation shared by the factories

pub mod articles;
pub mod help_request;
pub mod helpers;
pub mod ucsb_organization;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use articles::create_article;
pub use help_request::create_help_request;
pub use ucsb_organization::create_organization;
pub use user::create_user;
