//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take raw column values (tier ordinals, category
//! strings) so they stay independent of the application's domain enums.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let season = factory::create_active_season(&db).await?;
//!     let member = factory::create_member(&db).await?;
//!
//!     // Create a league holding ranked members
//!     let (league, members) =
//!         factory::helpers::create_league_with_members(&db, season.id, &[30, 20, 10]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let league = factory::league::LeagueFactory::new(&db, season.id)
//!     .category("university")
//!     .tier(3)
//!     .week(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `season` - Create season entities
//! - `member` - Create member entities
//! - `league` - Create league entities
//! - `ranking` - Create ranking entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod helpers;
pub mod league;
pub mod member;
pub mod ranking;
pub mod season;

// Re-export commonly used factory functions for concise usage
pub use league::create_league;
pub use member::create_member;
pub use ranking::create_ranking;
pub use season::create_active_season;
