use crate::server::{
    data::member::MemberRepository,
    model::{category::Category, tier::Tier},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_ids;
mod find_unranked;
mod raise_personal_best;
