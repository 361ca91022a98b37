//! SeaORM entity models for the league engine schema.
//!
//! `league`, `ranking` and `league_cycle` are owned by the league engine. `season`,
//! `member` and `mail` belong to collaborating subsystems and are mirrored here so the
//! engine can reference them through foreign keys.

pub mod prelude;

pub mod league;
pub mod league_cycle;
pub mod mail;
pub mod member;
pub mod ranking;
pub mod season;
