//! Wire types returned by the JSON routes.

pub mod api;
pub mod league;
