use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    service::league::policy::{PolicyTable, TierPolicy},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads and validates the tier policy table named by `TIER_POLICY_PATH`.
///
/// # Returns
/// - `Ok(Arc<dyn TierPolicy>)` - A validated policy, shared with the promotion step
/// - `Err(AppError::PolicyErr)` - The file is unreadable, malformed or incomplete
pub fn load_tier_policy(config: &Config) -> Result<Arc<dyn TierPolicy>, AppError> {
    let table = PolicyTable::load(&config.tier_policy_path)?;

    tracing::info!(
        version = %table.version,
        final_week = table.final_week,
        "Tier policy loaded"
    );

    Ok(Arc::new(table))
}
