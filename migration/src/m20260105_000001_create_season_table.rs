use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Season::Table)
                    .if_not_exists()
                    .col(pk_auto(Season::Id))
                    .col(string(Season::Name))
                    .col(date(Season::StartDate))
                    .col(date(Season::EndDate))
                    .to_owned(),
            )
            .await?;

        // Active season lookup filters on the date range
        manager
            .create_index(
                Index::create()
                    .name("idx_season_date_range")
                    .table(Season::Table)
                    .col(Season::StartDate)
                    .col(Season::EndDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_season_date_range")
                    .table(Season::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Season::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Season {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
}
