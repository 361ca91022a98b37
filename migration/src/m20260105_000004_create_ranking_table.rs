use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_member_table::Member, m20260105_000003_create_league_table::League,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ranking::Table)
                    .if_not_exists()
                    .col(pk_auto(Ranking::Id))
                    .col(integer(Ranking::LeagueId))
                    .col(integer(Ranking::MemberId))
                    .col(integer(Ranking::Tier))
                    .col(big_integer(Ranking::Score).default(0))
                    .col(
                        timestamp(Ranking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ranking_league_id")
                            .from(Ranking::Table, Ranking::LeagueId)
                            .to(League::Table, League::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ranking_member_id")
                            .from(Ranking::Table, Ranking::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A member holds at most one ranking per league
        manager
            .create_index(
                Index::create()
                    .name("idx_ranking_league_member_unique")
                    .table(Ranking::Table)
                    .col(Ranking::LeagueId)
                    .col(Ranking::MemberId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ranking_member_id")
                    .table(Ranking::Table)
                    .col(Ranking::MemberId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ranking_member_id")
                    .table(Ranking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_ranking_league_member_unique")
                    .table(Ranking::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ranking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ranking {
    Table,
    Id,
    LeagueId,
    MemberId,
    Tier,
    Score,
    CreatedAt,
}
