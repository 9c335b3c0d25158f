use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder,
};

use crate::server::model::help_request::{
    HelpRequest, HelpRequestFields, UpsertHelpRequestParams,
};

pub struct HelpRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HelpRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every row in insertion order. An upsert keeps the row's original position.
    pub async fn find_all(&self) -> Result<Vec<HelpRequest>, DbErr> {
        let entities = entity::prelude::HelpRequest::find()
            .order_by_asc(Expr::cust("rowid"))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(HelpRequest::from_entity).collect())
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<HelpRequest>, DbErr> {
        let entity = entity::prelude::HelpRequest::find_by_id(code.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(HelpRequest::from_entity))
    }

    /// Inserts a help request, overwriting every field of any existing request with the
    /// same code.
    ///
    /// # Returns
    /// - `Ok(HelpRequest)` - The stored help request
    /// - `Err(DbErr)` - Database error during insert
    pub async fn upsert(&self, params: UpsertHelpRequestParams) -> Result<HelpRequest, DbErr> {
        let fields = params.fields;

        let entity = entity::prelude::HelpRequest::insert(entity::help_request::ActiveModel {
            code: ActiveValue::Set(params.code),
            name: ActiveValue::Set(fields.name),
            has_sack_meal: ActiveValue::Set(fields.has_sack_meal),
            has_take_out_meal: ActiveValue::Set(fields.has_take_out_meal),
            has_dining_cam: ActiveValue::Set(fields.has_dining_cam),
            latitude: ActiveValue::Set(fields.latitude),
            longitude: ActiveValue::Set(fields.longitude),
        })
        .on_conflict(
            OnConflict::column(entity::help_request::Column::Code)
                .update_columns([
                    entity::help_request::Column::Name,
                    entity::help_request::Column::HasSackMeal,
                    entity::help_request::Column::HasTakeOutMeal,
                    entity::help_request::Column::HasDiningCam,
                    entity::help_request::Column::Latitude,
                    entity::help_request::Column::Longitude,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(HelpRequest::from_entity(entity))
    }

    /// Replaces the non-key fields of an existing help request.
    ///
    /// # Returns
    /// - `Ok(Some(HelpRequest))` - The updated help request
    /// - `Ok(None)` - No help request exists with that code
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(
        &self,
        code: &str,
        fields: HelpRequestFields,
    ) -> Result<Option<HelpRequest>, DbErr> {
        let Some(existing) = entity::prelude::HelpRequest::find_by_id(code.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::help_request::ActiveModel = existing.into();
        active.name = ActiveValue::Set(fields.name);
        active.has_sack_meal = ActiveValue::Set(fields.has_sack_meal);
        active.has_take_out_meal = ActiveValue::Set(fields.has_take_out_meal);
        active.has_dining_cam = ActiveValue::Set(fields.has_dining_cam);
        active.latitude = ActiveValue::Set(fields.latitude);
        active.longitude = ActiveValue::Set(fields.longitude);

        let entity = active.update(self.db).await?;

        Ok(Some(HelpRequest::from_entity(entity)))
    }

    pub async fn delete(&self, code: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::HelpRequest::delete_by_id(code.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
