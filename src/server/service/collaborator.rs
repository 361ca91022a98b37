//! Capabilities the league engine consumes from subsystems it does not own.
//!
//! The SeaORM repositories in `data` implement these traits. The league services only
//! see the traits, so tests can substitute stores that fail or record calls.

use sea_orm::DbErr;

use crate::server::model::{member::Member, tier::Tier};

/// Read access to members plus personal-best write-back.
#[async_trait::async_trait]
pub trait MemberStore: Send + Sync {
    /// Loads members by ID. Unknown IDs are absent from the result.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Member>, DbErr>;

    /// Members without a ranking in the season, oldest first, at most `limit`.
    async fn find_unranked(&self, season_id: i32, limit: u64) -> Result<Vec<Member>, DbErr>;

    /// Raises the personal-best tier if `tier` is higher. Returns whether it changed.
    async fn raise_personal_best(&self, member_id: i32, tier: Tier) -> Result<bool, DbErr>;
}

/// Delivers reward messages to a member's inbox.
#[async_trait::async_trait]
pub trait RewardIssuer: Send + Sync {
    async fn create_reward_message(
        &self,
        member_id: i32,
        tier: Tier,
        amount: u32,
    ) -> Result<(), DbErr>;
}
