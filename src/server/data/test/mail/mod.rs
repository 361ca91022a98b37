use crate::server::{
    data::mail::MailRepository,
    model::{reward::PromotionReward, tier::Tier},
    service::collaborator::RewardIssuer,
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use test_utils::{builder::TestBuilder, factory};

mod create_reward;
