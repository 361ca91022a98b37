//! Segmentation categories.
//!
//! Every league belongs to exactly one category and members of different categories never
//! share a league. Categories are stored as their snake_case key.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    MiddleSchool,
    HighSchool,
    University,
    JobSeeker,
    Employee,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::MiddleSchool,
        Category::HighSchool,
        Category::University,
        Category::JobSeeker,
        Category::Employee,
        Category::Other,
    ];

    /// Storage key of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::MiddleSchool => "middle_school",
            Category::HighSchool => "high_school",
            Category::University => "university",
            Category::JobSeeker => "job_seeker",
            Category::Employee => "employee",
            Category::Other => "other",
        }
    }

    /// Prefix used when naming leagues of this category.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::MiddleSchool => "Middle School",
            Category::HighSchool => "High School",
            Category::University => "University",
            Category::JobSeeker => "Job Seeker",
            Category::Employee => "Employee",
            Category::Other => "Open",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}
