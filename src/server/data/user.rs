//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for looking up the users that the
//! authorization guard resolves from sessions, and for granting admin rights to the
//! addresses configured at startup.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::user::User;

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by their database ID.
    ///
    /// # Arguments
    /// - `id` - User ID as stored in the session
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user found with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets every user ordered by ID.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Ensures a user with the given email exists and has admin privileges.
    ///
    /// Inserts a new admin user named after the address, or sets the admin flag on the
    /// existing user with that email. An existing user's name is left unchanged.
    ///
    /// # Arguments
    /// - `email` - Email address of the administrator
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated admin user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn ensure_admin(&self, email: &str) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(email.to_string()),
            admin: ActiveValue::Set(true),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .update_column(entity::user::Column::Admin)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }
}
