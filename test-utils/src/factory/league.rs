//! League factory for creating test league entities.

use crate::factory::helpers::next_id;
use chrono::{Datelike, Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test leagues with customizable fields.
///
/// The factory only writes the league row; use `helpers::fill_league` to add rankings
/// and keep `current_members` consistent.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::league::LeagueFactory;
///
/// let league = LeagueFactory::new(&db, season.id)
///     .category("university")
///     .current_members(108)
///     .build()
///     .await?;
/// ```
pub struct LeagueFactory<'a> {
    db: &'a DatabaseConnection,
    season_id: i32,
    category: String,
    tier: i32,
    name: String,
    week: i32,
    current_members: i32,
    capacity: i32,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl<'a> LeagueFactory<'a> {
    /// Creates a new LeagueFactory with default values.
    ///
    /// Defaults:
    /// - category: `"employee"`
    /// - tier: `1` (entry tier)
    /// - name: `"League {id}"` where id is auto-incremented
    /// - week: `1`
    /// - current_members: `0`
    /// - capacity: `110`
    /// - start_date/end_date: Monday and Sunday of the current week
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `season_id` - Season the league belongs to
    pub fn new(db: &'a DatabaseConnection, season_id: i32) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        let start_date = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        Self {
            db,
            season_id,
            category: "employee".to_string(),
            tier: 1,
            name: format!("League {}", id),
            week: 1,
            current_members: 0,
            capacity: 110,
            start_date,
            end_date: start_date + Duration::days(6),
        }
    }

    /// Sets the league category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the tier ordinal.
    pub fn tier(mut self, tier: i32) -> Self {
        self.tier = tier;
        self
    }

    /// Sets the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the week counter.
    pub fn week(mut self, week: i32) -> Self {
        self.week = week;
        self
    }

    /// Sets the member counter without creating rankings.
    pub fn current_members(mut self, current_members: i32) -> Self {
        self.current_members = current_members;
        self
    }

    /// Sets the league capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the date range of the league's week.
    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the league entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::league::Model)` - Created league entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::league::Model, DbErr> {
        entity::league::ActiveModel {
            id: ActiveValue::NotSet,
            season_id: ActiveValue::Set(self.season_id),
            category: ActiveValue::Set(self.category),
            tier: ActiveValue::Set(self.tier),
            name: ActiveValue::Set(self.name),
            week: ActiveValue::Set(self.week),
            current_members: ActiveValue::Set(self.current_members),
            capacity: ActiveValue::Set(self.capacity),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an empty entry-tier league with default values.
///
/// Shorthand for `LeagueFactory::new(db, season_id).build().await`.
pub async fn create_league(
    db: &DatabaseConnection,
    season_id: i32,
) -> Result<entity::league::Model, DbErr> {
    LeagueFactory::new(db, season_id).build().await
}
