use sea_orm::DatabaseConnection;

use crate::server::{
    data::help_request::HelpRequestRepository,
    error::AppError,
    model::help_request::{HelpRequest, HelpRequestFields, UpsertHelpRequestParams},
    service::deleted_message,
};

pub struct HelpRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HelpRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<HelpRequest>, AppError> {
        Ok(HelpRequestRepository::new(self.db).find_all().await?)
    }

    pub async fn get_by_code(&self, code: &str) -> Result<HelpRequest, AppError> {
        HelpRequestRepository::new(self.db)
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(HelpRequest::ENTITY_NAME, code))
    }

    /// Stores a help request, replacing any existing request with the same code
    pub async fn create(&self, params: UpsertHelpRequestParams) -> Result<HelpRequest, AppError> {
        Ok(HelpRequestRepository::new(self.db).upsert(params).await?)
    }

    pub async fn update(
        &self,
        code: &str,
        fields: HelpRequestFields,
    ) -> Result<HelpRequest, AppError> {
        HelpRequestRepository::new(self.db)
            .update(code, fields)
            .await?
            .ok_or_else(|| AppError::not_found(HelpRequest::ENTITY_NAME, code))
    }

    pub async fn delete(&self, code: &str) -> Result<String, AppError> {
        if !HelpRequestRepository::new(self.db).delete(code).await? {
            return Err(AppError::not_found(HelpRequest::ENTITY_NAME, code));
        }

        Ok(deleted_message(HelpRequest::ENTITY_NAME, code))
    }
}
