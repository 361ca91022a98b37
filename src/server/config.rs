use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
/// Monday 00:00:00, the weekly league boundary.
const DEFAULT_WEEKLY_CYCLE_CRON: &str = "0 0 0 * * Mon";

const DEFAULT_ENTRY_LEAGUE_CAPACITY: u32 = 110;
const DEFAULT_TARGET_LEAGUE_SIZE: u32 = 100;
const DEFAULT_PLACEMENT_BATCH_SIZE: u64 = 5000;
const DEFAULT_STEP_RETRY_LIMIT: u32 = 3;
const DEFAULT_STEP_SKIP_LIMIT: u32 = 100;

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    pub tier_policy_path: String,
    pub weekly_cycle_cron: String,

    pub league: LeagueSettings,
}

/// Sizing and fault-tolerance knobs for the weekly league steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeagueSettings {
    /// Hard cap on members of an entry-tier league.
    pub entry_league_capacity: u32,
    /// Soft target size of leagues rebuilt by promotion/relegation.
    pub target_league_size: u32,
    /// Maximum number of newly eligible members placed per run.
    pub placement_batch_size: u64,
    /// Retries granted to a step for transient infrastructure failures.
    pub retry_limit: u32,
    /// Defective items a step may skip before it aborts.
    pub skip_limit: u32,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            entry_league_capacity: DEFAULT_ENTRY_LEAGUE_CAPACITY,
            target_league_size: DEFAULT_TARGET_LEAGUE_SIZE,
            placement_batch_size: DEFAULT_PLACEMENT_BATCH_SIZE,
            retry_limit: DEFAULT_STEP_RETRY_LIMIT,
            skip_limit: DEFAULT_STEP_SKIP_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let league = LeagueSettings {
            entry_league_capacity: positive_env_or(
                "ENTRY_LEAGUE_CAPACITY",
                DEFAULT_ENTRY_LEAGUE_CAPACITY,
            )?,
            target_league_size: positive_env_or("TARGET_LEAGUE_SIZE", DEFAULT_TARGET_LEAGUE_SIZE)?,
            placement_batch_size: positive_env_or(
                "PLACEMENT_BATCH_SIZE",
                DEFAULT_PLACEMENT_BATCH_SIZE,
            )?,
            retry_limit: env_or("STEP_RETRY_LIMIT", DEFAULT_STEP_RETRY_LIMIT)?,
            skip_limit: env_or("STEP_SKIP_LIMIT", DEFAULT_STEP_SKIP_LIMIT)?,
        };

        Ok(Self {
            database_url: required_env("DATABASE_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            tier_policy_path: required_env("TIER_POLICY_PATH")?,
            weekly_cycle_cron: std::env::var("WEEKLY_CYCLE_CRON")
                .unwrap_or_else(|_| DEFAULT_WEEKLY_CYCLE_CRON.to_string()),
            league,
        })
    }
}

fn required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional numeric variable, falling back to `default` when unset.
fn env_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}

/// Like `env_or` but rejects zero, which would make league sizing degenerate.
fn positive_env_or<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialEq + Default + ToString,
    T::Err: std::fmt::Display,
{
    let value = env_or(name, default)?;
    if value == T::default() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}
