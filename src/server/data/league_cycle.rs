//! Completion markers of the promotion cycle.
//!
//! A marker is written in the same transaction as a category's teardown and rebuild, so
//! its presence means that category's cycle for the ISO week has fully committed.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::category::Category;

pub struct LeagueCycleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueCycleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks whether the category's cycle for `cycle_key` has already committed.
    pub async fn exists(
        &self,
        season_id: i32,
        category: Category,
        cycle_key: &str,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::LeagueCycle::find()
            .filter(entity::league_cycle::Column::SeasonId.eq(season_id))
            .filter(entity::league_cycle::Column::Category.eq(category.as_str()))
            .filter(entity::league_cycle::Column::CycleKey.eq(cycle_key))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Records that the category's cycle committed.
    ///
    /// # Arguments
    /// - `processed_week` - League-week number that was torn down
    ///
    /// # Returns
    /// - `Ok(Model)` - The stored marker
    /// - `Err(DbErr)` - Database error, including a duplicate marker for the same cycle
    pub async fn create(
        &self,
        season_id: i32,
        category: Category,
        cycle_key: &str,
        processed_week: i32,
    ) -> Result<entity::league_cycle::Model, DbErr> {
        entity::league_cycle::ActiveModel {
            season_id: ActiveValue::Set(season_id),
            category: ActiveValue::Set(category.as_str().to_string()),
            cycle_key: ActiveValue::Set(cycle_key.to_string()),
            processed_week: ActiveValue::Set(processed_week),
            completed_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
