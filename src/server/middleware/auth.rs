use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{Role, User},
};

/// Role an operation requires of its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Any authenticated user.
    User,
    /// Administrators only.
    Admin,
}

impl Permission {
    /// Role that satisfies this permission.
    pub fn role(self) -> Role {
        match self {
            Permission::User => Role::User,
            Permission::Admin => Role::Admin,
        }
    }

    /// Returns whether a caller holding `roles` satisfies this permission.
    pub fn is_granted(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role())
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the caller from the session and checks every listed permission.
    ///
    /// Runs before any other work in a handler so that a denied request never reaches
    /// the service layer.
    ///
    /// # Arguments
    /// - `permissions` - Permissions the caller must all hold
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated caller
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No user ID stored in the session
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - Session references an unknown user
    /// - `Err(AppError::AuthErr(AccessDenied))` - Caller lacks a required role
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let roles = user.roles();

        for permission in permissions {
            if !permission.is_granted(&roles) {
                return Err(AuthError::AccessDenied(
                    user_id,
                    format!("missing required role {}", permission.role().as_str()),
                )
                .into());
            }
        }

        Ok(user)
    }
}
