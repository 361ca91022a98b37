//! Member domain model.
//!
//! Members are owned by the account subsystem. The league engine only reads their
//! category and personal-best tier and writes the latter back on promotion.

use sea_orm::DbErr;

use crate::server::model::{category::Category, tier::Tier};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: i32,
    pub nickname: String,
    /// `None` when the member has no category or the stored key is unknown.
    pub category: Option<Category>,
    /// Highest tier ever reached; gates the one-time promotion reward.
    pub personal_best_tier: Tier,
}

impl Member {
    /// Converts an entity model to a member domain model at the repository boundary.
    ///
    /// An unrecognised category key is treated as missing segmentation data rather than a
    /// conversion failure, so the member is skipped as a data defect by the league steps.
    ///
    /// # Returns
    /// - `Ok(Member)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored personal-best tier ordinal is invalid
    pub fn from_entity(entity: entity::member::Model) -> Result<Self, DbErr> {
        let category = match entity.category {
            Some(key) => match key.parse::<Category>() {
                Ok(category) => Some(category),
                Err(e) => {
                    tracing::warn!(member_id = entity.id, "{}", e);
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            id: entity.id,
            nickname: entity.nickname,
            category,
            personal_best_tier: Tier::try_from(entity.personal_best_tier)?,
        })
    }
}
