//! Database repository layer for the league engine.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep the
//! data layer separate from business logic. Every repository is generic over
//! `ConnectionTrait` so the same queries run against the pooled connection or inside a
//! transaction.

pub mod league;
pub mod league_cycle;
pub mod mail;
pub mod member;
pub mod ranking;
pub mod season;

#[cfg(test)]
mod test;
