//! Competitive tier enumeration.
//!
//! Tiers are totally ordered from the entry tier (`Bronze`) to the top tier (`Master`).
//! The database stores a tier as its ordinal, starting at 1 for the entry tier.

use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Bronze = 1,
    Silver = 2,
    Gold = 3,
    Platinum = 4,
    Diamond = 5,
    Master = 6,
}

impl Tier {
    /// All tiers in ascending order. Per-tier pools are processed in this order.
    pub const ALL: [Tier; 6] = [
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Diamond,
        Tier::Master,
    ];

    /// The only tier a brand-new participant can enter.
    pub const ENTRY: Tier = Tier::Bronze;

    /// The tier with no further promotion.
    pub const TOP: Tier = Tier::Master;

    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.ordinal() == ordinal)
    }

    /// Moves `steps` tiers up (positive) or down (negative), clamped to the tier range.
    pub fn shifted(self, steps: i32) -> Self {
        let ordinal = (self.ordinal() + steps).clamp(Self::ENTRY.ordinal(), Self::TOP.ordinal());
        Self::from_ordinal(ordinal).unwrap_or(self)
    }

    /// Lower-case name used on the wire, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Platinum => "platinum",
            Tier::Diamond => "diamond",
            Tier::Master => "master",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Diamond => "Diamond",
            Tier::Master => "Master",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| format!("Unknown tier: {}", s))
    }
}

impl TryFrom<i32> for Tier {
    type Error = DbErr;

    /// Converts a stored tier ordinal at the repository boundary.
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_ordinal(value)
            .ok_or_else(|| DbErr::Custom(format!("Invalid tier ordinal: {}", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that shifting clamps at both ends of the tier range.
    ///
    /// Expected: Entry tier cannot drop, top tier cannot rise
    #[test]
    fn shifted_clamps_to_range() {
        assert_eq!(Tier::Bronze.shifted(-1), Tier::Bronze);
        assert_eq!(Tier::Master.shifted(1), Tier::Master);
        assert_eq!(Tier::Gold.shifted(2), Tier::Diamond);
        assert_eq!(Tier::Silver.shifted(-2), Tier::Bronze);
    }

    /// Tests ordinal round-tripping and rejection of unknown ordinals.
    ///
    /// Expected: Every tier converts back from its ordinal, 0 and 7 fail
    #[test]
    fn converts_from_ordinal() {
        for tier in Tier::ALL {
            assert_eq!(Tier::try_from(tier.ordinal()).unwrap(), tier);
        }
        assert!(Tier::try_from(0).is_err());
        assert!(Tier::try_from(7).is_err());
    }

    /// Tests parsing wire names.
    ///
    /// Expected: Lower-case names parse, display names are rejected
    #[test]
    fn parses_wire_name() {
        assert_eq!("platinum".parse::<Tier>(), Ok(Tier::Platinum));
        assert_eq!("Gold".parse::<Tier>(), Err("Unknown tier: Gold".to_string()));
    }
}
