//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy. `AppError` is the top-level
//! error type that wraps domain-specific errors, classifies infrastructure failures as
//! transient or permanent for the maintenance step retry policy, and implements
//! `IntoResponse` for the read-only query endpoints.

pub mod config;
pub mod league;
pub mod policy;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, league::LeagueError, policy::PolicyError},
};

/// Lower-cased fragments of driver messages that indicate a write conflict or lock
/// contention which may succeed when retried.
const TRANSIENT_DB_MESSAGES: [&str; 6] = [
    "database is locked",
    "database is busy",
    "deadlock",
    "could not serialize",
    "lock wait timeout",
    "serialization failure",
];

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Tier policy table could not be loaded or failed validation.
    #[error(transparent)]
    PolicyErr(#[from] PolicyError),

    /// League lifecycle failure (no active season, exhausted skip or retry budget).
    #[error(transparent)]
    LeagueErr(#[from] LeagueError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Listener or socket error while serving the query API.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Whether retrying the failed operation may succeed.
    ///
    /// Connection failures and lock/serialization conflicts reported by the driver are
    /// transient. Data defects, configuration problems and exhausted budgets are not.
    ///
    /// # Returns
    /// - `true` - The error is a transient infrastructure failure
    /// - `false` - Retrying would fail the same way
    pub fn is_transient(&self) -> bool {
        match self {
            Self::DbErr(err) => is_transient_db_err(err),
            _ => false,
        }
    }
}

fn is_transient_db_err(err: &DbErr) -> bool {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => true,
        DbErr::Exec(_) | DbErr::Query(_) => {
            let message = err.to_string().to_lowercase();
            TRANSIENT_DB_MESSAGES
                .iter()
                .any(|fragment| message.contains(fragment))
        }
        _ => false,
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound`, missing leagues/members and no active season
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::LeagueErr(
                err @ (LeagueError::NoActiveSeason { .. }
                | LeagueError::LeagueNotFound(_)
                | LeagueError::MemberNotFound(_)),
            ) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::RuntimeErr;

    /// Tests that lock contention reported by the driver is retryable.
    ///
    /// Expected: Exec error mentioning a locked database is transient
    #[test]
    fn locked_database_is_transient() {
        let err = AppError::DbErr(DbErr::Exec(RuntimeErr::Internal(
            "error returned from database: (code: 5) database is locked".to_string(),
        )));

        assert!(err.is_transient());
    }

    /// Tests that constraint violations are not retried.
    ///
    /// Expected: Exec error for a unique constraint is permanent
    #[test]
    fn constraint_violation_is_permanent() {
        let err = AppError::DbErr(DbErr::Exec(RuntimeErr::Internal(
            "UNIQUE constraint failed: ranking.league_id, ranking.member_id".to_string(),
        )));

        assert!(!err.is_transient());
    }

    /// Tests that domain errors are never retried.
    ///
    /// Expected: NoActiveSeason and RecordNotFound are permanent
    #[test]
    fn domain_errors_are_permanent() {
        let no_season = AppError::from(LeagueError::NoActiveSeason {
            date: chrono::NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        });
        let missing = AppError::DbErr(DbErr::RecordNotFound("league".to_string()));

        assert!(!no_season.is_transient());
        assert!(!missing.is_transient());
    }
}
