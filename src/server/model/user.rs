//! User domain models and roles.
//!
//! Users are created by the external login flow or by admin seeding at startup. The
//! only authorization data they carry is the `admin` flag, from which the caller's
//! roles are derived.

use crate::model::user::{CurrentUserDto, UserDto};

/// Role granted to an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Wire name of the role, as reported by `GET /api/currentUser`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

/// Application user known to the database.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Display name of the user.
    pub name: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
}

impl User {
    /// Roles held by this user.
    ///
    /// Every user holds `Role::User`. Admins additionally hold `Role::Admin`.
    pub fn roles(&self) -> Vec<Role> {
        if self.admin {
            vec![Role::User, Role::Admin]
        } else {
            vec![Role::User]
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            admin: entity.admin,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            admin: self.admin,
        }
    }

    /// Converts the user into the `currentUser` response, listing its role names.
    pub fn into_current_user_dto(self) -> CurrentUserDto {
        let roles = self
            .roles()
            .iter()
            .map(|role| role.as_str().to_string())
            .collect();

        CurrentUserDto {
            user: self.into_dto(),
            roles,
        }
    }
}
