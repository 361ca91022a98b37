use crate::server::{data::league_cycle::LeagueCycleRepository, model::category::Category};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod exists;
