//! Reward mail written on behalf of the mail subsystem.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::server::{
    model::{reward::PromotionReward, tier::Tier},
    service::collaborator::RewardIssuer,
};

pub struct MailRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MailRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Drops an unclaimed promotion reward message into the member's inbox.
    ///
    /// # Returns
    /// - `Ok(entity::mail::Model)` - The stored message
    /// - `Err(DbErr)` - Database error, including an unknown member
    pub async fn create_reward(
        &self,
        reward: PromotionReward,
    ) -> Result<entity::mail::Model, DbErr> {
        entity::mail::ActiveModel {
            member_id: ActiveValue::Set(reward.member_id),
            title: ActiveValue::Set(reward.title()),
            body: ActiveValue::Set(reward.body()),
            reward_amount: ActiveValue::Set(reward.amount as i32),
            tier: ActiveValue::Set(Some(reward.tier.ordinal())),
            is_claimed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

#[async_trait::async_trait]
impl<'a, C> RewardIssuer for MailRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn create_reward_message(
        &self,
        member_id: i32,
        tier: Tier,
        amount: u32,
    ) -> Result<(), DbErr> {
        self.create_reward(PromotionReward {
            member_id,
            tier,
            amount,
        })
        .await?;

        Ok(())
    }
}
