//! Season lookups.

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::season::Season;

pub struct SeasonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds the season whose date range contains `date`.
    ///
    /// Seasons do not overlap, so at most one matches. The earliest start wins if the
    /// external season data ever violates that.
    ///
    /// # Returns
    /// - `Ok(Some(Season))` - The active season
    /// - `Ok(None)` - No season contains the date
    /// - `Err(DbErr)` - Database error
    pub async fn find_active(&self, date: NaiveDate) -> Result<Option<Season>, DbErr> {
        let season = entity::prelude::Season::find()
            .filter(entity::season::Column::StartDate.lte(date))
            .filter(entity::season::Column::EndDate.gte(date))
            .order_by_asc(entity::season::Column::StartDate)
            .one(self.db)
            .await?;

        Ok(season.map(Season::from_entity))
    }
}
