use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::organization::OrganizationRepository,
    model::organization::{OrganizationFields, UpsertOrganizationParams},
};

mod delete;
mod update;
mod upsert;
