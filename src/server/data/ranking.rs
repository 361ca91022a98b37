//! Ranking data repository.
//!
//! Rankings seat a member in a league for one week. They are created with a zero score,
//! scored by the activity subsystem and hard-deleted with their league at the next
//! promotion cycle.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::ranking::{CreateRankingParams, RankedMember, Ranking};

pub struct RankingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RankingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Seats a member in a league with a zero score.
    ///
    /// # Returns
    /// - `Ok(Ranking)` - The created ranking
    /// - `Err(DbErr)` - Database error, including a duplicate seat in the same league
    pub async fn create(&self, params: CreateRankingParams) -> Result<Ranking, DbErr> {
        let ranking = entity::ranking::ActiveModel {
            league_id: ActiveValue::Set(params.league_id),
            member_id: ActiveValue::Set(params.member_id),
            tier: ActiveValue::Set(params.tier.ordinal()),
            score: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ranking::from_entity(ranking)
    }

    /// Seats several members, in order.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rankings created
    /// - `Err(DbErr)` - Database error on any insert
    pub async fn create_many(&self, params: &[CreateRankingParams]) -> Result<u64, DbErr> {
        for param in params {
            self.create(*param).await?;
        }

        Ok(params.len() as u64)
    }

    /// Gets all rankings of the given leagues in store order (ID ascending).
    pub async fn get_by_league_ids(&self, league_ids: &[i32]) -> Result<Vec<Ranking>, DbErr> {
        if league_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ranking::find()
            .filter(entity::ranking::Column::LeagueId.is_in(league_ids.iter().copied()))
            .order_by_asc(entity::ranking::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Ranking::from_entity)
            .collect()
    }

    /// Builds a league's leaderboard: score descending, ties by seat creation.
    ///
    /// # Returns
    /// - `Ok(Vec<RankedMember>)` - Members with 1-based ranks
    /// - `Err(DbErr)` - Database error
    pub async fn get_leaderboard(&self, league_id: i32) -> Result<Vec<RankedMember>, DbErr> {
        let rows = entity::prelude::Ranking::find()
            .filter(entity::ranking::Column::LeagueId.eq(league_id))
            .order_by_desc(entity::ranking::Column::Score)
            .order_by_asc(entity::ranking::Column::Id)
            .find_also_related(entity::prelude::Member)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .enumerate()
            .map(|(index, (ranking, member))| RankedMember {
                rank: index as u32 + 1,
                member_id: ranking.member_id,
                nickname: member.map(|m| m.nickname).unwrap_or_default(),
                score: ranking.score,
            })
            .collect())
    }

    /// Finds a member's ranking in any league of the season.
    ///
    /// A member holds at most one seat per season, so the first match is returned.
    pub async fn find_for_member(
        &self,
        member_id: i32,
        season_id: i32,
    ) -> Result<Option<Ranking>, DbErr> {
        entity::prelude::Ranking::find()
            .join(JoinType::InnerJoin, entity::ranking::Relation::League.def())
            .filter(entity::ranking::Column::MemberId.eq(member_id))
            .filter(entity::league::Column::SeasonId.eq(season_id))
            .order_by_desc(entity::ranking::Column::Id)
            .one(self.db)
            .await?
            .map(Ranking::from_entity)
            .transpose()
    }

    /// Hard-deletes all rankings of the given leagues.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rankings deleted
    /// - `Err(DbErr)` - Database error
    pub async fn delete_by_league_ids(&self, league_ids: &[i32]) -> Result<u64, DbErr> {
        if league_ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Ranking::delete_many()
            .filter(entity::ranking::Column::LeagueId.is_in(league_ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
