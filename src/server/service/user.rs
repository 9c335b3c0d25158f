//! User service for business logic.
//!
//! This module provides the `UserService` for listing users and for granting admin
//! rights to the addresses configured at startup.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError, model::user::User};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - All users, possibly empty
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Grants admin privileges to each of the given addresses.
    ///
    /// Users that do not exist yet are created. Called once at startup with the
    /// configured admin list.
    ///
    /// # Arguments
    /// - `emails` - Addresses to grant admin privileges to
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - The admin users, in the order given
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn seed_admins(&self, emails: &[String]) -> Result<Vec<User>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let mut admins = Vec::with_capacity(emails.len());
        for email in emails {
            let user = user_repo.ensure_admin(email).await?;

            tracing::info!("Granted admin privileges to {}", user.email);

            admins.push(user);
        }

        Ok(admins)
    }
}
