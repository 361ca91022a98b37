//! Season domain model.

use chrono::NaiveDate;

/// A bounded competitive period. Exactly one season contains any given date.
#[derive(Debug, Clone, PartialEq)]
pub struct Season {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Season {
    /// Converts an entity model to a season domain model at the repository boundary.
    pub fn from_entity(entity: entity::season::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            start_date: entity.start_date,
            end_date: entity.end_date,
        }
    }
}
