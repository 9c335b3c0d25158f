//! Organization factory for creating test organization entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test organizations with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let zpr = OrganizationFactory::new(&db)
///     .org_code("zpr")
///     .org_translation_short("Zeta Phi Rho")
///     .org_translation("Zeta Phi Rho")
///     .build()
///     .await?;
/// ```
pub struct OrganizationFactory<'a> {
    db: &'a DatabaseConnection,
    org_code: String,
    org_translation_short: String,
    org_translation: String,
    inactive: bool,
}

impl<'a> OrganizationFactory<'a> {
    /// Creates a new OrganizationFactory with default values.
    ///
    /// Defaults:
    /// - org_code: `"org{n}"`
    /// - org_translation_short: `"Org {n}"`
    /// - org_translation: `"Organization {n}"`
    /// - inactive: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            org_code: format!("org{}", id),
            org_translation_short: format!("Org {}", id),
            org_translation: format!("Organization {}", id),
            inactive: false,
        }
    }

    pub fn org_code(mut self, org_code: impl Into<String>) -> Self {
        self.org_code = org_code.into();
        self
    }

    pub fn org_translation_short(mut self, value: impl Into<String>) -> Self {
        self.org_translation_short = value.into();
        self
    }

    pub fn org_translation(mut self, value: impl Into<String>) -> Self {
        self.org_translation = value.into();
        self
    }

    pub fn inactive(mut self, inactive: bool) -> Self {
        self.inactive = inactive;
        self
    }

    /// Builds and inserts the organization entity into the database.
    pub async fn build(self) -> Result<entity::ucsb_organization::Model, DbErr> {
        entity::ucsb_organization::ActiveModel {
            org_code: ActiveValue::Set(self.org_code),
            org_translation_short: ActiveValue::Set(self.org_translation_short),
            org_translation: ActiveValue::Set(self.org_translation),
            inactive: ActiveValue::Set(self.inactive),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an organization with default values.
pub async fn create_organization(
    db: &DatabaseConnection,
) -> Result<entity::ucsb_organization::Model, DbErr> {
    OrganizationFactory::new(db).build().await
}
