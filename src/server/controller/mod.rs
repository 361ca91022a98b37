//! HTTP request handlers for the read-only league routes.
//!
//! Handlers resolve the active season against today's UTC date, call
//! `LeagueQueryService` and convert domain models to DTOs. Errors flow through
//! `AppError`'s `IntoResponse` implementation.

pub mod league;
pub mod member;

#[cfg(test)]
mod test;
