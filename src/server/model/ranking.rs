//! Domain models for league membership and standings.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::league::{MemberRankingDto, RankedMemberDto},
    server::model::{league::League, tier::Tier},
};

/// A member's seat in a league for the current week.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    pub id: i32,
    pub league_id: i32,
    pub member_id: i32,
    /// Copy of the league's tier.
    pub tier: Tier,
    pub score: i64,
    pub created_at: DateTime<Utc>,
}

impl Ranking {
    /// Converts an entity model to a ranking domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Ranking)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored tier ordinal is invalid
    pub fn from_entity(entity: entity::ranking::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            league_id: entity.league_id,
            member_id: entity.member_id,
            tier: Tier::try_from(entity.tier)?,
            score: entity.score,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for seating a member in a league with a zero score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateRankingParams {
    pub league_id: i32,
    pub member_id: i32,
    pub tier: Tier,
}

/// One row of a league's leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMember {
    /// 1-based position, ties ordered by seat creation.
    pub rank: u32,
    pub member_id: i32,
    pub nickname: String,
    pub score: i64,
}

impl RankedMember {
    pub fn into_dto(self) -> RankedMemberDto {
        RankedMemberDto {
            rank: self.rank,
            member_id: self.member_id,
            nickname: self.nickname,
            score: self.score,
        }
    }
}

/// A member's current position in their league.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberStanding {
    pub league: League,
    pub ranking: Ranking,
    pub rank: u32,
}

impl MemberStanding {
    pub fn into_dto(self) -> MemberRankingDto {
        MemberRankingDto {
            member_id: self.ranking.member_id,
            rank: self.rank,
            score: self.ranking.score,
            tier: self.ranking.tier.as_str().to_string(),
            joined_at: self.ranking.created_at,
            league: self.league.into_dto(),
        }
    }
}
