//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Fills an existing league with one new member per score.
///
/// Each member is created in the league's category, receives a ranking with the league's
/// tier and the given score, and the league's `current_members` counter is updated to match
/// the number of rankings created.
///
/// # Arguments
/// - `db` - Database connection
/// - `league` - League to fill
/// - `scores` - One score per member, in insertion order
///
/// # Returns
/// - `Ok((league, members))` - Updated league and the members created, in score order given
/// - `Err(DbErr)` - Database error during creation
pub async fn fill_league(
    db: &DatabaseConnection,
    league: entity::league::Model,
    scores: &[i64],
) -> Result<(entity::league::Model, Vec<entity::member::Model>), DbErr> {
    let mut members = Vec::with_capacity(scores.len());

    for score in scores {
        let member = crate::factory::member::MemberFactory::new(db)
            .category(Some(league.category.clone()))
            .personal_best_tier(league.tier)
            .build()
            .await?;

        crate::factory::ranking::RankingFactory::new(db, league.id, member.id)
            .tier(league.tier)
            .score(*score)
            .build()
            .await?;

        members.push(member);
    }

    let current_members = league.current_members + scores.len() as i32;
    let mut active = league.into_active_model();
    active.current_members = ActiveValue::Set(current_members);
    let league = active.update(db).await?;

    Ok((league, members))
}

/// Creates a default league in the given season and fills it with ranked members.
///
/// # Arguments
/// - `db` - Database connection
/// - `season_id` - Season the league belongs to
/// - `scores` - One score per member
///
/// # Returns
/// - `Ok((league, members))` - Created league and members
/// - `Err(DbErr)` - Database error during creation
pub async fn create_league_with_members(
    db: &DatabaseConnection,
    season_id: i32,
    scores: &[i64],
) -> Result<(entity::league::Model, Vec<entity::member::Model>), DbErr> {
    let league = crate::factory::league::create_league(db, season_id).await?;

    fill_league(db, league, scores).await
}
