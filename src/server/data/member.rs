//! Member reads and personal-best write-back.
//!
//! Members belong to the account subsystem. The league engine never creates or deletes
//! them; it only lists members waiting for a seat and raises personal-best tiers.

use sea_orm::{
    sea_query::{Expr, ExprTrait, Query},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::{member::Member, tier::Tier},
    service::collaborator::MemberStore,
};

pub struct MemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Member>, DbErr> {
        entity::prelude::Member::find_by_id(id)
            .one(self.db)
            .await?
            .map(Member::from_entity)
            .transpose()
    }

    /// Loads the members with the given IDs. Missing IDs are silently absent from the result.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Member>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Member::find()
            .filter(entity::member::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::member::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }

    /// Lists members holding no ranking in any league of the season, oldest first.
    ///
    /// # Arguments
    /// - `season_id` - Season whose leagues are checked
    /// - `limit` - Maximum number of members returned
    ///
    /// # Returns
    /// - `Ok(Vec<Member>)` - Up to `limit` unranked members in registration order
    /// - `Err(DbErr)` - Database error or an invalid stored tier
    pub async fn find_unranked(&self, season_id: i32, limit: u64) -> Result<Vec<Member>, DbErr> {
        let ranked_in_season = Query::select()
            .column((entity::ranking::Entity, entity::ranking::Column::MemberId))
            .from(entity::ranking::Entity)
            .inner_join(
                entity::league::Entity,
                Expr::col((entity::league::Entity, entity::league::Column::Id))
                    .equals((entity::ranking::Entity, entity::ranking::Column::LeagueId)),
            )
            .and_where(
                Expr::col((entity::league::Entity, entity::league::Column::SeasonId)).eq(season_id),
            )
            .to_owned();

        entity::prelude::Member::find()
            .filter(entity::member::Column::Id.not_in_subquery(ranked_in_season))
            .order_by_asc(entity::member::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Member::from_entity)
            .collect()
    }

    /// Raises a member's personal-best tier. Never lowers it.
    ///
    /// # Returns
    /// - `Ok(true)` - The personal best was raised
    /// - `Ok(false)` - The stored personal best was already at or above `tier`
    /// - `Err(DbErr::RecordNotFound)` - No member with this ID
    pub async fn raise_personal_best(&self, member_id: i32, tier: Tier) -> Result<bool, DbErr> {
        let member = entity::prelude::Member::find_by_id(member_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Member {} not found", member_id)))?;

        if member.personal_best_tier >= tier.ordinal() {
            return Ok(false);
        }

        let mut active = member.into_active_model();
        active.personal_best_tier = ActiveValue::Set(tier.ordinal());
        active.update(self.db).await?;

        Ok(true)
    }
}

#[async_trait::async_trait]
impl<'a, C> MemberStore for MemberRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Member>, DbErr> {
        MemberRepository::find_by_ids(self, ids).await
    }

    async fn find_unranked(&self, season_id: i32, limit: u64) -> Result<Vec<Member>, DbErr> {
        MemberRepository::find_unranked(self, season_id, limit).await
    }

    async fn raise_personal_best(&self, member_id: i32, tier: Tier) -> Result<bool, DbErr> {
        MemberRepository::raise_personal_best(self, member_id, tier).await
    }
}
