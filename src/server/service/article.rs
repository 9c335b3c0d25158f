use sea_orm::DatabaseConnection;

use crate::server::{
    data::article::ArticleRepository,
    error::AppError,
    model::article::{Article, ArticleParams},
    service::deleted_message,
};

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Article>, AppError> {
        Ok(ArticleRepository::new(self.db).find_all().await?)
    }

    /// Gets an article by ID, failing with `EntityNotFound` when it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(Article::ENTITY_NAME, id))
    }

    pub async fn create(&self, params: ArticleParams) -> Result<Article, AppError> {
        Ok(ArticleRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: ArticleParams) -> Result<Article, AppError> {
        ArticleRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::not_found(Article::ENTITY_NAME, id))
    }

    /// Deletes an article and returns the confirmation message
    pub async fn delete(&self, id: i32) -> Result<String, AppError> {
        if !ArticleRepository::new(self.db).delete(id).await? {
            return Err(AppError::not_found(Article::ENTITY_NAME, id));
        }

        Ok(deleted_message(Article::ENTITY_NAME, id))
    }
}
