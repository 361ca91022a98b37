use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_member_table::Member;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mail::Table)
                    .if_not_exists()
                    .col(pk_auto(Mail::Id))
                    .col(integer(Mail::MemberId))
                    .col(string(Mail::Title))
                    .col(text(Mail::Body))
                    .col(integer(Mail::RewardAmount).default(0))
                    .col(integer_null(Mail::Tier))
                    .col(boolean(Mail::IsClaimed).default(false))
                    .col(
                        timestamp(Mail::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mail_member_id")
                            .from(Mail::Table, Mail::MemberId)
                            .to(Member::Table, Member::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mail {
    Table,
    Id,
    MemberId,
    Title,
    Body,
    RewardAmount,
    Tier,
    IsClaimed,
    CreatedAt,
}
