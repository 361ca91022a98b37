use crate::server::{
    config::LeagueSettings,
    data::{mail::MailRepository, member::MemberRepository},
    error::{league::LeagueError, AppError},
    model::tier::Tier,
    service::maintenance::fault::SkipBudget,
};
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use test_utils::{builder::TestBuilder, factory};


fn skips(limit: u32) -> SkipBudget {
    SkipBudget::new("test", limit)
}

async fn leagues_of(
    db: &DatabaseConnection,
    category: &str,
) -> Result<Vec<entity::league::Model>, DbErr> {
    entity::prelude::League::find()
        .filter(entity::league::Column::Category.eq(category))
        .order_by_asc(entity::league::Column::Id)
        .all(db)
        .await
}

async fn ranking_count(db: &DatabaseConnection, league_id: i32) -> Result<u64, DbErr> {
    entity::prelude::Ranking::find()
        .filter(entity::ranking::Column::LeagueId.eq(league_id))
        .count(db)
        .await
}
