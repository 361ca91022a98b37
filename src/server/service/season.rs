use chrono::NaiveDate;
use sea_orm::ConnectionTrait;

use crate::server::{
    data::season::SeasonRepository,
    error::{league::LeagueError, AppError},
    model::season::Season,
};

pub struct SeasonService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SeasonService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Resolves the season active on `date`.
    ///
    /// Every league operation calls this first so that a missing season aborts the
    /// operation before anything is written.
    ///
    /// # Returns
    /// - `Ok(Season)` - The active season
    /// - `Err(AppError::LeagueErr(NoActiveSeason))` - No season contains the date
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn require_active(&self, date: NaiveDate) -> Result<Season, AppError> {
        SeasonRepository::new(self.db)
            .find_active(date)
            .await?
            .ok_or_else(|| LeagueError::NoActiveSeason { date }.into())
    }
}
