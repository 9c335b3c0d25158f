use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait,
    QueryOrder,
};

use crate::server::model::organization::{
    Organization, OrganizationFields, UpsertOrganizationParams,
};

pub struct OrganizationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every row in insertion order. An upsert keeps the row's original position.
    pub async fn find_all(&self) -> Result<Vec<Organization>, DbErr> {
        let entities = entity::prelude::UcsbOrganization::find()
            .order_by_asc(Expr::cust("rowid"))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Organization::from_entity).collect())
    }

    pub async fn find_by_code(&self, org_code: &str) -> Result<Option<Organization>, DbErr> {
        let entity = entity::prelude::UcsbOrganization::find_by_id(org_code.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Organization::from_entity))
    }

    /// Inserts an organization, overwriting any existing organization with the same code
    pub async fn upsert(&self, params: UpsertOrganizationParams) -> Result<Organization, DbErr> {
        let fields = params.fields;

        let entity =
            entity::prelude::UcsbOrganization::insert(entity::ucsb_organization::ActiveModel {
                org_code: ActiveValue::Set(params.org_code),
                org_translation_short: ActiveValue::Set(fields.org_translation_short),
                org_translation: ActiveValue::Set(fields.org_translation),
                inactive: ActiveValue::Set(fields.inactive),
            })
            .on_conflict(
                OnConflict::column(entity::ucsb_organization::Column::OrgCode)
                    .update_columns([
                        entity::ucsb_organization::Column::OrgTranslationShort,
                        entity::ucsb_organization::Column::OrgTranslation,
                        entity::ucsb_organization::Column::Inactive,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        Ok(Organization::from_entity(entity))
    }

    /// Replaces the non-key fields of an existing organization.
    ///
    /// Returns `Ok(None)` when no organization has the given code.
    pub async fn update(
        &self,
        org_code: &str,
        fields: OrganizationFields,
    ) -> Result<Option<Organization>, DbErr> {
        let Some(existing) = entity::prelude::UcsbOrganization::find_by_id(org_code.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::ucsb_organization::ActiveModel = existing.into();
        active.org_translation_short = ActiveValue::Set(fields.org_translation_short);
        active.org_translation = ActiveValue::Set(fields.org_translation);
        active.inactive = ActiveValue::Set(fields.inactive);

        let entity = active.update(self.db).await?;

        Ok(Some(Organization::from_entity(entity)))
    }

    pub async fn delete(&self, org_code: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::UcsbOrganization::delete_by_id(org_code.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
