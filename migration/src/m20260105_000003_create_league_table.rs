use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_season_table::Season;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(League::Table)
                    .if_not_exists()
                    .col(pk_auto(League::Id))
                    .col(integer(League::SeasonId))
                    .col(string(League::Category))
                    .col(integer(League::Tier))
                    .col(string(League::Name))
                    .col(integer(League::Week).default(1))
                    .col(integer(League::CurrentMembers).default(0))
                    .col(integer(League::Capacity))
                    .col(date(League::StartDate))
                    .col(date(League::EndDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_season_id")
                            .from(League::Table, League::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Placement and promotion both load leagues per (season, category, tier)
        manager
            .create_index(
                Index::create()
                    .name("idx_league_season_category_tier")
                    .table(League::Table)
                    .col(League::SeasonId)
                    .col(League::Category)
                    .col(League::Tier)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_league_season_category_tier")
                    .table(League::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(League::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum League {
    Table,
    Id,
    SeasonId,
    Category,
    Tier,
    Name,
    Week,
    CurrentMembers,
    Capacity,
    StartDate,
    EndDate,
}
