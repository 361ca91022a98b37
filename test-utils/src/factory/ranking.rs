//! Ranking factory for creating test ranking entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rankings with customizable fields.
///
/// Does not touch the league's `current_members` counter.
pub struct RankingFactory<'a> {
    db: &'a DatabaseConnection,
    league_id: i32,
    member_id: i32,
    tier: i32,
    score: i64,
}

impl<'a> RankingFactory<'a> {
    /// Creates a new RankingFactory with default values.
    ///
    /// Defaults:
    /// - tier: `1` (entry tier)
    /// - score: `0`
    pub fn new(db: &'a DatabaseConnection, league_id: i32, member_id: i32) -> Self {
        Self {
            db,
            league_id,
            member_id,
            tier: 1,
            score: 0,
        }
    }

    /// Sets the tier ordinal copied from the league.
    pub fn tier(mut self, tier: i32) -> Self {
        self.tier = tier;
        self
    }

    /// Sets the weekly score.
    pub fn score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Builds and inserts the ranking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::ranking::Model)` - Created ranking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ranking::Model, DbErr> {
        entity::ranking::ActiveModel {
            id: ActiveValue::NotSet,
            league_id: ActiveValue::Set(self.league_id),
            member_id: ActiveValue::Set(self.member_id),
            tier: ActiveValue::Set(self.tier),
            score: ActiveValue::Set(self.score),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a zero-score entry-tier ranking.
///
/// Shorthand for `RankingFactory::new(db, league_id, member_id).build().await`.
pub async fn create_ranking(
    db: &DatabaseConnection,
    league_id: i32,
    member_id: i32,
) -> Result<entity::ranking::Model, DbErr> {
    RankingFactory::new(db, league_id, member_id).build().await
}
