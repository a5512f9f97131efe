use std::collections::HashSet;

use serde::Deserialize;

use crate::catalog::CatalogError;
use crate::models::course::{Course, CourseLevel};

/// Browse filter. Every supplied field must match exactly; `None` matches all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseFilter {
    pub skill: Option<String>,
    pub platform: Option<String>,
    pub level: Option<CourseLevel>,
}

impl CourseFilter {
    fn matches(&self, course: &Course) -> bool {
        self.skill.as_deref().map_or(true, |s| course.skill == s)
            && self.platform.as_deref().map_or(true, |p| course.platform == p)
            && self.level.map_or(true, |l| course.level == l)
    }
}

/// Course entries in catalog order, unique by id.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        if let Some(dup) = courses.iter().find(|c| !seen.insert(c.id.as_str())) {
            return Err(CatalogError::Invalid(format!(
                "duplicate course id '{}'",
                dup.id
            )));
        }
        Ok(Self { courses })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let courses: Vec<Course> =
            serde_json::from_str(json).map_err(|e| CatalogError::json("course catalog", e))?;
        Self::new(courses)
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses teaching exactly `skill`, in catalog order.
    pub fn for_skill<'a>(&'a self, skill: &'a str) -> impl Iterator<Item = &'a Course> + 'a {
        self.courses.iter().filter(move |c| c.skill == skill)
    }

    pub fn filter(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_course(id: &str, skill: &str, platform: &str, level: CourseLevel) -> Course {
        Course {
            id: id.to_string(),
            title: format!("{skill} course"),
            platform: platform.to_string(),
            provider: "Provider".to_string(),
            skill: skill.to_string(),
            level,
            duration: "4 weeks".to_string(),
            url: format!("https://example.org/{id}"),
            description: String::new(),
            free: true,
        }
    }

    fn sample() -> CourseCatalog {
        CourseCatalog::new(vec![
            make_course("py-1", "Python", "SWAYAM", CourseLevel::Beginner),
            make_course("sql-1", "SQL", "Coursera", CourseLevel::Beginner),
            make_course("py-2", "Python", "Coursera", CourseLevel::Intermediate),
        ])
        .unwrap()
    }

    #[test]
    fn test_duplicate_course_id_rejected() {
        let err = CourseCatalog::new(vec![
            make_course("dup", "SQL", "Coursera", CourseLevel::Beginner),
            make_course("dup", "Python", "Coursera", CourseLevel::Beginner),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("dup"));
    }

    #[test]
    fn test_for_skill_keeps_catalog_order() {
        let catalog = sample();
        let ids: Vec<_> = catalog.for_skill("Python").map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["py-1", "py-2"]);
        assert_eq!(catalog.for_skill("Rust").count(), 0);
    }

    #[test]
    fn test_filter_combines_fields() {
        let catalog = sample();
        let all = catalog.filter(&CourseFilter::default());
        assert_eq!(all.len(), 3);

        let coursera_beginner = catalog.filter(&CourseFilter {
            platform: Some("Coursera".to_string()),
            level: Some(CourseLevel::Beginner),
            ..Default::default()
        });
        assert_eq!(coursera_beginner.len(), 1);
        assert_eq!(coursera_beginner[0].id, "sql-1");
    }
}
