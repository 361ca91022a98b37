//! Weekly maintenance pipeline.

pub mod fault;
pub mod orchestrator;
