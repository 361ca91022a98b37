//! Tier transition policy.
//!
//! The percentile cutoffs are an external, versioned input loaded from a JSON document at
//! startup. `PolicyTable` validates the document once and then answers transitions as a
//! pure function of (current tier, percentile, final week).
//!
//! Percentiles are `(position + 1) / league size`, so `0 < p <= 1` and the best member of a
//! league has the smallest percentile. For each tier a band says:
//!
//! - `p <= promote_within` moves up one tier
//! - `p > relegate_beyond` moves down one tier
//! - in the final week only, `double_promote_within` / `double_relegate_beyond` move two tiers
//!
//! Shifts are clamped at the entry and top tiers.

use serde::Deserialize;
use std::{collections::BTreeMap, path::Path};

use crate::server::{error::policy::PolicyError, model::tier::Tier};

const WEEKLY_TABLE: &str = "weekly_bands";
const FINAL_WEEK_TABLE: &str = "final_week_bands";
const REWARD_TABLE: &str = "promotion_rewards";

/// Computes a member's next tier from their standing in a league.
pub trait TierPolicy: Send + Sync {
    fn next_tier(&self, current: Tier, percentile: f64, is_final_week: bool) -> Tier;

    /// League-week number that closes a cycle.
    fn final_week(&self) -> i32;

    /// One-time reward for reaching `tier` for the first time.
    fn promotion_reward(&self, tier: Tier) -> u32;

    fn is_final_week(&self, week: i32) -> bool {
        week == self.final_week()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TierBand {
    pub promote_within: f64,
    pub relegate_beyond: f64,
    #[serde(default)]
    pub double_promote_within: Option<f64>,
    #[serde(default)]
    pub double_relegate_beyond: Option<f64>,
}

impl TierBand {
    fn steps(&self, percentile: f64) -> i32 {
        if let Some(cutoff) = self.double_promote_within {
            if percentile <= cutoff {
                return 2;
            }
        }
        if percentile <= self.promote_within {
            return 1;
        }
        if let Some(cutoff) = self.double_relegate_beyond {
            if percentile > cutoff {
                return -2;
            }
        }
        if percentile > self.relegate_beyond {
            return -1;
        }
        0
    }

    fn validate(&self, allow_double: bool) -> Result<(), String> {
        let cutoffs = [
            Some(self.promote_within),
            Some(self.relegate_beyond),
            self.double_promote_within,
            self.double_relegate_beyond,
        ];
        if cutoffs
            .iter()
            .flatten()
            .any(|cutoff| !(0.0..=1.0).contains(cutoff))
        {
            return Err("cutoffs must lie within [0, 1]".to_string());
        }
        if self.promote_within > self.relegate_beyond {
            return Err("promote_within must not exceed relegate_beyond".to_string());
        }
        if !allow_double
            && (self.double_promote_within.is_some() || self.double_relegate_beyond.is_some())
        {
            return Err("double moves are only allowed in the final week".to_string());
        }
        if let Some(cutoff) = self.double_promote_within {
            if cutoff > self.promote_within {
                return Err("double_promote_within must not exceed promote_within".to_string());
            }
        }
        if let Some(cutoff) = self.double_relegate_beyond {
            if cutoff < self.relegate_beyond {
                return Err("double_relegate_beyond must not be below relegate_beyond".to_string());
            }
        }
        Ok(())
    }
}

/// A validated, versioned policy document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PolicyTable {
    pub version: String,
    pub final_week: i32,
    pub weekly_bands: BTreeMap<Tier, TierBand>,
    pub final_week_bands: BTreeMap<Tier, TierBand>,
    pub promotion_rewards: BTreeMap<Tier, u32>,
}

impl PolicyTable {
    /// Reads and validates the policy document at `path`.
    ///
    /// # Returns
    /// - `Ok(PolicyTable)` - A complete, consistent table
    /// - `Err(PolicyError)` - The file is unreadable, malformed or inconsistent
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PolicyError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<(), PolicyError> {
        if self.final_week < 1 {
            return Err(PolicyError::InvalidFinalWeek {
                version: self.version.clone(),
                final_week: self.final_week,
            });
        }

        for (table, bands, allow_double) in [
            (WEEKLY_TABLE, &self.weekly_bands, false),
            (FINAL_WEEK_TABLE, &self.final_week_bands, true),
        ] {
            for tier in Tier::ALL {
                let band = bands.get(&tier).ok_or_else(|| PolicyError::MissingBand {
                    version: self.version.clone(),
                    table,
                    tier,
                })?;
                band.validate(allow_double)
                    .map_err(|reason| PolicyError::InvalidBand {
                        version: self.version.clone(),
                        table,
                        tier,
                        reason,
                    })?;
            }
        }

        // Every tier reachable by promotion needs a reward amount.
        for tier in Tier::ALL.into_iter().filter(|tier| *tier != Tier::ENTRY) {
            if !self.promotion_rewards.contains_key(&tier) {
                return Err(PolicyError::MissingBand {
                    version: self.version.clone(),
                    table: REWARD_TABLE,
                    tier,
                });
            }
        }

        Ok(())
    }
}

impl TierPolicy for PolicyTable {
    fn next_tier(&self, current: Tier, percentile: f64, is_final_week: bool) -> Tier {
        let bands = if is_final_week {
            &self.final_week_bands
        } else {
            &self.weekly_bands
        };

        match bands.get(&current) {
            Some(band) => current.shifted(band.steps(percentile)),
            None => current,
        }
    }

    fn final_week(&self) -> i32 {
        self.final_week
    }

    fn promotion_reward(&self, tier: Tier) -> u32 {
        self.promotion_rewards.get(&tier).copied().unwrap_or(0)
    }
}
