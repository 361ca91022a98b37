//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers/scheduler and the data layer. They resolve the
//! active season, own transaction boundaries, and work with domain models rather than
//! DTOs or entity models.
//!
//! - `league` - capacity queue, tier policy, entry placement, promotion/relegation, queries
//! - `maintenance` - the weekly pipeline with its retry and skip budgets
//! - `collaborator` - capability traits for subsystems the league engine does not own

pub mod collaborator;
pub mod league;
pub mod maintenance;
pub mod season;
