use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::article::{Article, ArticleParams};

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every article ordered by ID
    pub async fn find_all(&self) -> Result<Vec<Article>, DbErr> {
        let entities = entity::prelude::Articles::find()
            .order_by_asc(entity::articles::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Article::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Article>, DbErr> {
        let entity = entity::prelude::Articles::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Article::from_entity))
    }

    /// Inserts a new article and returns it with its generated ID
    pub async fn create(&self, params: ArticleParams) -> Result<Article, DbErr> {
        let entity = entity::articles::ActiveModel {
            title: ActiveValue::Set(params.title),
            url: ActiveValue::Set(params.url),
            explanation: ActiveValue::Set(params.explanation),
            email: ActiveValue::Set(params.email),
            date_added: ActiveValue::Set(params.date_added),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Article::from_entity(entity))
    }

    /// Replaces every field of an existing article except its ID.
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - The updated article
    /// - `Ok(None)` - No article exists with that ID
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(&self, id: i32, params: ArticleParams) -> Result<Option<Article>, DbErr> {
        let Some(existing) = entity::prelude::Articles::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::articles::ActiveModel = existing.into();
        active.title = ActiveValue::Set(params.title);
        active.url = ActiveValue::Set(params.url);
        active.explanation = ActiveValue::Set(params.explanation);
        active.email = ActiveValue::Set(params.email);
        active.date_added = ActiveValue::Set(params.date_added);

        let entity = active.update(self.db).await?;

        Ok(Some(Article::from_entity(entity)))
    }

    /// Deletes an article, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Articles::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
