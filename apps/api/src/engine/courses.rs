//! Course recommender: picks a bounded, beginner-first course list for a set of missing skills.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::courses::CourseCatalog;
use crate::models::course::Course;

/// Caps applied while selecting courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseLimits {
    pub per_skill: usize,
    pub total: usize,
}

impl Default for CourseLimits {
    fn default() -> Self {
        Self {
            per_skill: 2,
            total: 6,
        }
    }
}

/// Selects courses for `missing_skills`, in skill order.
///
/// Algorithm:
/// 1. For each skill, take catalog courses teaching exactly that skill
/// 2. Stable-sort them Beginner → Intermediate → Advanced
/// 3. Keep the first `per_skill`
/// 4. Drop repeated course ids (first wins), then truncate to `total`
///
/// Skills with no courses contribute nothing.
pub fn recommend_courses(
    missing_skills: &[String],
    catalog: &CourseCatalog,
    limits: &CourseLimits,
) -> Vec<Course> {
    let mut picked: Vec<&Course> = Vec::new();

    for skill in missing_skills {
        let mut skill_courses: Vec<&Course> = catalog.for_skill(skill).collect();
        if skill_courses.is_empty() {
            debug!("No courses found for skill '{skill}'");
            continue;
        }
        skill_courses.sort_by_key(|c| c.level);
        picked.extend(skill_courses.into_iter().take(limits.per_skill));
    }

    let mut seen = HashSet::new();
    picked
        .into_iter()
        .filter(|c| seen.insert(c.id.as_str()))
        .take(limits.total)
        .cloned()
        .collect()
}
