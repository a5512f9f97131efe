//! Learning pathway: career matching, skill gaps and course selection combined into one report.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::engine::courses::{recommend_courses, CourseLimits};
use crate::engine::matcher::{match_careers, DEFAULT_TOP_CAREERS};
use crate::engine::skill_gap::{resolve_skill_gap, GapStatus, SkillGap};
use crate::models::course::Course;
use crate::models::riasec::DimensionScores;

const QUALIFIED_MESSAGE: &str = "You already have the required skills for this career!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwaySettings {
    pub top_careers: usize,
    pub course_limits: CourseLimits,
}

impl Default for PathwaySettings {
    fn default() -> Self {
        Self {
            top_careers: DEFAULT_TOP_CAREERS,
            course_limits: CourseLimits::default(),
        }
    }
}

/// One actionable career in a pathway report. `courses` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRecommendation {
    pub career: String,
    pub required_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPathway {
    pub user_skills: Vec<String>,
    pub top_careers: Vec<String>,
    pub recommendations: Vec<SkillGapRecommendation>,
}

/// Course recommendation for a single, explicitly chosen career.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerCourseRecommendation {
    pub career: String,
    pub status: GapStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub required_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub courses: Vec<Course>,
    pub total_courses: usize,
}

pub fn recommend_for_career(
    career: &str,
    current_skills: &HashSet<String>,
    catalog: &Catalog,
    limits: &CourseLimits,
) -> CareerCourseRecommendation {
    let gap = resolve_skill_gap(career, current_skills, &catalog.skills);
    let courses = recommend_courses(gap.missing_skills(), &catalog.courses, limits);

    let message = match &gap {
        SkillGap::UnknownCareer => Some(format!(
            "No skill requirements are known for '{career}'."
        )),
        SkillGap::Qualified { .. } => Some(QUALIFIED_MESSAGE.to_string()),
        SkillGap::Missing { .. } => None,
    };

    CareerCourseRecommendation {
        career: career.to_string(),
        status: gap.status(),
        message,
        required_skills: gap.required_skills().to_vec(),
        missing_skills: gap.missing_skills().to_vec(),
        total_courses: courses.len(),
        courses,
    }
}

/// Builds the consolidated report for a user.
///
/// Every matched career is listed in `top_careers`; only careers with at
/// least one recommended course appear in `recommendations`.
pub fn build_learning_pathway(
    user_skills: &[String],
    scores: &DimensionScores,
    catalog: &Catalog,
    settings: &PathwaySettings,
) -> LearningPathway {
    let top_careers = match_careers(scores, &catalog.careers, settings.top_careers).career_names();
    let current: HashSet<String> = user_skills.iter().cloned().collect();

    let recommendations = top_careers
        .iter()
        .filter_map(|career| {
            let gap = resolve_skill_gap(career, &current, &catalog.skills);
            let courses =
                recommend_courses(gap.missing_skills(), &catalog.courses, &settings.course_limits);
            if courses.is_empty() {
                return None;
            }
            Some(SkillGapRecommendation {
                career: career.clone(),
                required_skills: gap.required_skills().to_vec(),
                missing_skills: gap.missing_skills().to_vec(),
                courses,
            })
        })
        .collect();

    LearningPathway {
        user_skills: user_skills.to_vec(),
        top_careers,
        recommendations,
    }
}
