use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::skills::SkillRequirements;

/// Outcome of comparing a user's skills against one career's requirements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillGap {
    /// The career is not in the requirement table.
    UnknownCareer,
    /// Every required skill is already held.
    Qualified { required: Vec<String> },
    /// At least one required skill is missing. `missing` keeps required-list order.
    Missing {
        required: Vec<String>,
        missing: Vec<String>,
    },
}

/// Wire label for a `SkillGap` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    MissingSkills,
    Qualified,
    UnknownCareer,
}

impl SkillGap {
    pub fn required_skills(&self) -> &[String] {
        match self {
            SkillGap::UnknownCareer => &[],
            SkillGap::Qualified { required } | SkillGap::Missing { required, .. } => required,
        }
    }

    pub fn missing_skills(&self) -> &[String] {
        match self {
            SkillGap::Missing { missing, .. } => missing,
            _ => &[],
        }
    }

    pub fn status(&self) -> GapStatus {
        match self {
            SkillGap::UnknownCareer => GapStatus::UnknownCareer,
            SkillGap::Qualified { .. } => GapStatus::Qualified,
            SkillGap::Missing { .. } => GapStatus::MissingSkills,
        }
    }
}

/// Required skills for `career` that are not in `current_skills`
/// (exact, case-sensitive comparison).
pub fn resolve_skill_gap(
    career: &str,
    current_skills: &HashSet<String>,
    requirements: &SkillRequirements,
) -> SkillGap {
    let Some(required) = requirements.required_skills(career) else {
        return SkillGap::UnknownCareer;
    };

    let missing: Vec<String> = required
        .iter()
        .filter(|skill| !current_skills.contains(*skill))
        .cloned()
        .collect();

    let required = required.to_vec();
    if missing.is_empty() {
        SkillGap::Qualified { required }
    } else {
        SkillGap::Missing { required, missing }
    }
}
