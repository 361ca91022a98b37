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
                    .table(LeagueCycle::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueCycle::Id))
                    .col(integer(LeagueCycle::SeasonId))
                    .col(string(LeagueCycle::Category))
                    .col(string(LeagueCycle::CycleKey))
                    .col(integer(LeagueCycle::ProcessedWeek))
                    .col(
                        timestamp(LeagueCycle::CompletedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_league_cycle_season_id")
                            .from(LeagueCycle::Table, LeagueCycle::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One completed promotion cycle per season, category and calendar week
        manager
            .create_index(
                Index::create()
                    .name("idx_league_cycle_unique")
                    .table(LeagueCycle::Table)
                    .col(LeagueCycle::SeasonId)
                    .col(LeagueCycle::Category)
                    .col(LeagueCycle::CycleKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_league_cycle_unique")
                    .table(LeagueCycle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LeagueCycle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LeagueCycle {
    Table,
    Id,
    SeasonId,
    Category,
    CycleKey,
    ProcessedWeek,
    CompletedAt,
}
