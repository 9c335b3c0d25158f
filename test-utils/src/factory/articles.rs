//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let article = ArticleFactory::new(&db)
///     .title("Article 1")
///     .url("https://example.com/1")
///     .build()
///     .await?;
/// ```
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    url: String,
    explanation: String,
    email: String,
    date_added: NaiveDateTime,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Article {n}"`
    /// - url: `"https://example.com/{n}"`
    /// - explanation: `"Explanation {n}"`
    /// - email: `"user{n}@example.com"`
    /// - date_added: `2022-01-01T00:00:00`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Article {}", id),
            url: format!("https://example.com/{}", id),
            explanation: format!("Explanation {}", id),
            email: format!("user{}@example.com", id),
            date_added: default_date_added(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn date_added(mut self, date_added: NaiveDateTime) -> Self {
        self.date_added = date_added;
        self
    }

    /// Builds and inserts the article entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::articles::Model)` - Created article with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::articles::Model, DbErr> {
        entity::articles::ActiveModel {
            title: ActiveValue::Set(self.title),
            url: ActiveValue::Set(self.url),
            explanation: ActiveValue::Set(self.explanation),
            email: ActiveValue::Set(self.email),
            date_added: ActiveValue::Set(self.date_added),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values.
pub async fn create_article(db: &DatabaseConnection) -> Result<entity::articles::Model, DbErr> {
    ArticleFactory::new(db).build().await
}

fn default_date_added() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2022, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}
