//! Fault budgets of a maintenance step.
//!
//! A step may skip defective items (members without a category, malformed leagues) up to
//! its skip limit and may retry transient infrastructure failures up to its retry limit.
//! Exceeding either aborts the step.

use std::{fmt::Display, future::Future, time::Duration};

use crate::server::error::{league::LeagueError, AppError};

/// Delay before the first retry; doubled on every further attempt.
pub const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);

/// Counts defective items skipped by one step attempt.
#[derive(Debug)]
pub struct SkipBudget {
    step: &'static str,
    limit: u32,
    skipped: u32,
}

impl SkipBudget {
    pub fn new(step: &'static str, limit: u32) -> Self {
        Self {
            step,
            limit,
            skipped: 0,
        }
    }

    /// Records one skipped item.
    ///
    /// # Returns
    /// - `Ok(())` - The item is skipped and the step continues
    /// - `Err(LeagueError::SkipLimitExceeded)` - More than `limit` items have been skipped
    pub fn record(&mut self, reason: impl Display) -> Result<(), LeagueError> {
        self.skipped += 1;
        tracing::warn!(step = self.step, skipped = self.skipped, "Skipping item: {}", reason);

        if self.skipped > self.limit {
            return Err(LeagueError::SkipLimitExceeded {
                step: self.step,
                limit: self.limit,
            });
        }
        Ok(())
    }

    pub fn skipped(&self) -> u32 {
        self.skipped
    }
}

/// Runs `operation` until it succeeds, fails permanently, or exhausts `retry_limit` retries.
///
/// Only errors classified by `AppError::is_transient` are retried. The wait before retry `n`
/// is `base_delay * 2^(n - 1)`.
///
/// # Returns
/// - `Ok((value, attempts))` - The successful result and the number of attempts made
/// - `Err(LeagueError::RetryLimitExceeded)` - Every attempt failed transiently
/// - `Err(AppError)` - The first permanent error
pub async fn with_retry<T, F, Fut>(
    step: &'static str,
    retry_limit: u32,
    base_delay: Duration,
    mut operation: F,
) -> Result<(T, u32), AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok((value, attempt)),
            Err(err) if err.is_transient() => {
                if attempt > retry_limit {
                    return Err(LeagueError::RetryLimitExceeded {
                        step,
                        attempts: attempt,
                        source: Box::new(err),
                    }
                    .into());
                }

                let delay = base_delay * 2u32.saturating_pow(attempt - 1);
                tracing::warn!(step, attempt, ?delay, "Transient failure, retrying: {}", err);
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
