use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::league::LeagueRepository, error::AppError, service::season::SeasonService,
    util::week::WeekWindow,
};

pub struct WeekCalendarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WeekCalendarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Moves the active season's leagues that ended before this week onto this week.
    ///
    /// League-week numbers are not changed; only the calendar date range rolls forward.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of leagues re-dated
    /// - `Err(AppError::LeagueErr(NoActiveSeason))` - No season is active
    pub async fn roll_week_window(&self, today: NaiveDate) -> Result<u64, AppError> {
        let season = SeasonService::new(self.db).require_active(today).await?;
        let window = WeekWindow::containing(today);

        let updated = LeagueRepository::new(self.db)
            .roll_stale_windows(season.id, window)
            .await?;

        tracing::info!(
            season_id = season.id,
            start = %window.start,
            end = %window.end,
            updated,
            "League week window rolled"
        );

        Ok(updated)
    }
}
