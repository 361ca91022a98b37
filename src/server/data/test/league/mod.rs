use crate::server::{
    data::league::LeagueRepository,
    model::{category::Category, league::CreateLeagueParams, tier::Tier},
    util::week::WeekWindow,
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod carry_forward;
mod create;
mod delete_by_ids;
mod get_by_category;
mod get_by_tier;
mod get_current_week;
mod roll_stale_windows;
mod set_current_members;
