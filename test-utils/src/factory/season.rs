//! Season factory for creating test season entities.

use crate::factory::helpers::next_id;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test seasons with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::season::SeasonFactory;
///
/// let past = SeasonFactory::new(&db)
///     .start_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
///     .end_date(NaiveDate::from_ymd_opt(2020, 3, 31).unwrap())
///     .build()
///     .await?;
/// ```
pub struct SeasonFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl<'a> SeasonFactory<'a> {
    /// Creates a new SeasonFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Season {id}"` where id is auto-incremented
    /// - start_date: 30 days before today
    /// - end_date: 60 days after today
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `SeasonFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            name: format!("Season {}", id),
            start_date: today - Duration::days(30),
            end_date: today + Duration::days(60),
        }
    }

    /// Sets the season name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the first day of the season.
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets the last day of the season.
    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the season entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::season::Model)` - Created season entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::season::Model, DbErr> {
        entity::season::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a season whose date range contains today.
///
/// Shorthand for `SeasonFactory::new(db).build().await`.
pub async fn create_active_season(db: &DatabaseConnection) -> Result<entity::season::Model, DbErr> {
    SeasonFactory::new(db).build().await
}
