//! Weekly league lifecycle backend.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - Read-only HTTP handlers and DTO conversion
//! - **Service Layer** (`service/`) - League placement, promotion/relegation, queries and
//!   the weekly maintenance orchestrator
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection, migrations and policy loading
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron trigger for the weekly cycle

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
