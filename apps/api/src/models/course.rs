use serde::{Deserialize, Serialize};

/// Course difficulty. Ordering is Beginner < Intermediate < Advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// A course catalog entry. Teaches exactly one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub platform: String,
    pub provider: String,
    pub skill: String,
    pub level: CourseLevel,
    pub duration: String,
    pub url: String,
    pub description: String,
    pub free: bool,
}
