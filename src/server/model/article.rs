//! Article domain models and parameters.

use chrono::NaiveDateTime;

use crate::model::article::{ArticleDto, CreateArticleDto, UpdateArticleDto};

/// A link to an article with a short explanation of why it is worth reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Generated primary key.
    pub id: i32,
    pub title: String,
    pub url: String,
    pub explanation: String,
    /// Address of whoever submitted the article.
    pub email: String,
    pub date_added: NaiveDateTime,
}

impl Article {
    /// Type name used in not-found and deletion messages.
    pub const ENTITY_NAME: &'static str = "Articles";

    /// Converts an entity model to an article domain model at the repository boundary.
    pub fn from_entity(entity: entity::articles::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            url: entity.url,
            explanation: entity.explanation,
            email: entity.email,
            date_added: entity.date_added,
        }
    }

    /// Converts the article domain model to a DTO for API responses.
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            id: self.id,
            title: self.title,
            url: self.url,
            explanation: self.explanation,
            email: self.email,
            date_added: self.date_added,
        }
    }
}

/// Fields of an article, used both to create and to replace one.
#[derive(Debug, Clone)]
pub struct ArticleParams {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

impl ArticleParams {
    pub fn from_create_dto(dto: CreateArticleDto) -> Self {
        Self {
            title: dto.title,
            url: dto.url,
            explanation: dto.explanation,
            email: dto.email,
            date_added: dto.date_added,
        }
    }

    pub fn from_update_dto(dto: UpdateArticleDto) -> Self {
        Self {
            title: dto.title,
            url: dto.url,
            explanation: dto.explanation,
            email: dto.email,
            date_added: dto.date_added,
        }
    }
}
