use crate::server::{
    data::ranking::RankingRepository,
    model::{ranking::CreateRankingParams, tier::Tier},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod delete_by_league_ids;
mod find_for_member;
mod get_leaderboard;
