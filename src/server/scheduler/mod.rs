//! Cron jobs driving the weekly league lifecycle.

pub mod weekly_cycle;
