use thiserror::Error;

use crate::server::model::tier::Tier;

/// Problems with the tier transition policy table.
///
/// The table is an external, versioned input. Any of these errors is a configuration
/// defect and prevents startup.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// The policy file could not be read.
    #[error("Failed to read tier policy from {path}: {source}")]
    Read {
        /// Path of the policy file
        path: String,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The policy document is not valid JSON or does not match the table layout.
    #[error("Failed to parse tier policy: {0}")]
    Parse(#[from] serde_json::Error),

    /// A tier has no percentile band in one of the band tables.
    #[error("Tier policy {version} has no {table} band for tier {tier}")]
    MissingBand {
        version: String,
        table: &'static str,
        tier: Tier,
    },

    /// A cutoff lies outside `[0, 1]` or the cutoffs of a band are out of order.
    #[error("Tier policy {version} has an invalid {table} band for tier {tier}: {reason}")]
    InvalidBand {
        version: String,
        table: &'static str,
        tier: Tier,
        reason: String,
    },

    /// The final week marker must be a positive week number.
    #[error("Tier policy {version} has invalid final week {final_week}")]
    InvalidFinalWeek { version: String, final_week: i32 },
}
