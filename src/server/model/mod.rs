//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Tier and category enums carry the
//! ordering and naming rules the league steps rely on.

pub mod category;
pub mod cycle;
pub mod league;
pub mod member;
pub mod ranking;
pub mod reward;
pub mod season;
pub mod tier;
