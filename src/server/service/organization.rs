use sea_orm::DatabaseConnection;

use crate::server::{
    data::organization::OrganizationRepository,
    error::AppError,
    model::organization::{Organization, OrganizationFields, UpsertOrganizationParams},
    service::deleted_message,
};

pub struct OrganizationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Organization>, AppError> {
        Ok(OrganizationRepository::new(self.db).find_all().await?)
    }

    pub async fn get_by_code(&self, org_code: &str) -> Result<Organization, AppError> {
        OrganizationRepository::new(self.db)
            .find_by_code(org_code)
            .await?
            .ok_or_else(|| AppError::not_found(Organization::ENTITY_NAME, org_code))
    }

    /// Stores an organization, replacing any existing organization with the same code
    pub async fn create(
        &self,
        params: UpsertOrganizationParams,
    ) -> Result<Organization, AppError> {
        Ok(OrganizationRepository::new(self.db).upsert(params).await?)
    }

    pub async fn update(
        &self,
        org_code: &str,
        fields: OrganizationFields,
    ) -> Result<Organization, AppError> {
        OrganizationRepository::new(self.db)
            .update(org_code, fields)
            .await?
            .ok_or_else(|| AppError::not_found(Organization::ENTITY_NAME, org_code))
    }

    pub async fn delete(&self, org_code: &str) -> Result<String, AppError> {
        if !OrganizationRepository::new(self.db).delete(org_code).await? {
            return Err(AppError::not_found(Organization::ENTITY_NAME, org_code));
        }

        Ok(deleted_message(Organization::ENTITY_NAME, org_code))
    }
}
