//! One-time promotion reward.

use crate::server::model::tier::Tier;

/// Reward owed to a member who reached a tier above their personal best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionReward {
    pub member_id: i32,
    pub tier: Tier,
    pub amount: u32,
}

impl PromotionReward {
    pub fn title(&self) -> String {
        format!("Promoted to {}!", self.tier)
    }

    /// Message body. Reaching the top tier also announces the end-of-season bonus.
    pub fn body(&self) -> String {
        if self.tier == Tier::TOP {
            format!(
                "Congratulations on reaching the {} league for the first time. \
                 Claim your {} coins now, and finish the season in {} to receive \
                 the end-of-season bonus.",
                self.tier, self.amount, self.tier
            )
        } else {
            format!(
                "Congratulations on reaching the {} league for the first time. \
                 Claim your {} coins now.",
                self.tier, self.amount
            )
        }
    }
}
