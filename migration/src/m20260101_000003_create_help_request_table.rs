use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HelpRequest::Table)
                    .if_not_exists()
                    .col(string(HelpRequest::Code).primary_key())
                    .col(string(HelpRequest::Name))
                    .col(boolean(HelpRequest::HasSackMeal))
                    .col(boolean(HelpRequest::HasTakeOutMeal))
                    .col(boolean(HelpRequest::HasDiningCam))
                    .col(double(HelpRequest::Latitude))
                    .col(double(HelpRequest::Longitude))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HelpRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum HelpRequest {
    Table,
    Code,
    Name,
    HasSackMeal,
    HasTakeOutMeal,
    HasDiningCam,
    Latitude,
    Longitude,
}
