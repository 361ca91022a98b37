//! League lifecycle services.
//!
//! - `capacity` - least-loaded-first bin allocator shared by placement and reshuffle
//! - `policy` - versioned tier transition table
//! - `placement` - seats newly eligible members in entry-tier leagues
//! - `promotion` - weekly ranking, teardown and rebuild
//! - `calendar` - rolls stale league date ranges onto the current week
//! - `query` - read-only lookups for the HTTP routes

pub mod calendar;
pub mod capacity;
pub mod placement;
pub mod policy;
pub mod promotion;
pub mod query;

#[cfg(test)]
mod test;
