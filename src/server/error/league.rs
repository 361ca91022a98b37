use chrono::NaiveDate;
use thiserror::Error;

use crate::server::error::AppError;

/// Failures raised by the league lifecycle steps.
#[derive(Error, Debug)]
pub enum LeagueError {
    /// No season's date range contains the run date.
    ///
    /// Fatal for every league operation. Steps return this before writing anything.
    #[error("No active season found for {date}")]
    NoActiveSeason {
        /// The date the lookup was made for
        date: NaiveDate,
    },

    /// A step skipped more defective items than its budget allows.
    #[error("Step {step} exceeded its skip limit of {limit} defective items")]
    SkipLimitExceeded {
        /// Name of the step that gave up
        step: &'static str,
        /// The configured skip limit
        limit: u32,
    },

    /// A step kept failing with transient errors after all retries.
    #[error("Step {step} failed after {attempts} attempts: {source}")]
    RetryLimitExceeded {
        /// Name of the step that gave up
        step: &'static str,
        /// Number of attempts made, including the first
        attempts: u32,
        /// The last transient error
        #[source]
        source: Box<AppError>,
    },

    /// League lookup by ID found nothing.
    #[error("League {0} not found")]
    LeagueNotFound(i32),

    /// Member lookup by ID found nothing.
    #[error("Member {0} not found")]
    MemberNotFound(i32),
}
