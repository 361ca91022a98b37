pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_season_table;
mod m20260105_000002_create_member_table;
mod m20260105_000003_create_league_table;
mod m20260105_000004_create_ranking_table;
mod m20260105_000005_create_mail_table;
mod m20260112_000006_create_league_cycle_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_season_table::Migration),
            Box::new(m20260105_000002_create_member_table::Migration),
            Box::new(m20260105_000003_create_league_table::Migration),
            Box::new(m20260105_000004_create_ranking_table::Migration),
            Box::new(m20260105_000005_create_mail_table::Migration),
            Box::new(m20260112_000006_create_league_cycle_table::Migration),
        ]
    }
}
