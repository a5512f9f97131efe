//! Catalog: the immutable reference data the engine runs against.
//!
//! Built once at startup (from `CATALOG_DIR` or the embedded `data/` files),
//! wrapped in `Arc`, and handed to handlers through `AppState`. Nothing in
//! here is mutated after construction.

pub mod careers;
pub mod courses;
pub mod questions;
pub mod skills;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::catalog::careers::CareerTable;
use crate::catalog::courses::CourseCatalog;
use crate::catalog::questions::QuestionBank;
use crate::catalog::skills::SkillRequirements;

pub const QUESTIONS_FILE: &str = "questions.csv";
pub const CAREERS_FILE: &str = "careers.json";
pub const CAREER_SKILLS_FILE: &str = "career_skills.json";
pub const COURSES_FILE: &str = "courses.json";

const EMBEDDED_QUESTIONS: &str = include_str!("../../data/questions.csv");
const EMBEDDED_CAREERS: &str = include_str!("../../data/careers.json");
const EMBEDDED_CAREER_SKILLS: &str = include_str!("../../data/career_skills.json");
const EMBEDDED_COURSES: &str = include_str!("../../data/courses.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed question CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed {name}: {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl CatalogError {
    pub(crate) fn json(name: &str, source: serde_json::Error) -> Self {
        CatalogError::Json {
            name: name.to_string(),
            source,
        }
    }
}

/// All four reference tables. Fields are public for read access; the
/// constructors of each table enforce its invariants.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub questions: QuestionBank,
    pub careers: CareerTable,
    pub skills: SkillRequirements,
    pub courses: CourseCatalog,
}

impl Catalog {
    pub fn new(
        questions: QuestionBank,
        careers: CareerTable,
        skills: SkillRequirements,
        courses: CourseCatalog,
    ) -> Self {
        Self {
            questions,
            careers,
            skills,
            courses,
        }
    }

    /// Loads from `dir` when given, otherwise from the compiled-in defaults.
    pub fn load(dir: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match dir {
            Some(dir) => Self::from_dir(dir)?,
            None => Self::embedded()?,
        };

        info!(
            "Catalog loaded: {} questions, {} RIASEC types, {} careers with skill requirements, {} courses",
            catalog.questions.len(),
            catalog.careers.len(),
            catalog.skills.len(),
            catalog.courses.len()
        );
        Ok(catalog)
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Ok(Self {
            questions: QuestionBank::from_csv_reader(EMBEDDED_QUESTIONS.as_bytes())?,
            careers: CareerTable::from_json(EMBEDDED_CAREERS)?,
            skills: SkillRequirements::from_json(EMBEDDED_CAREER_SKILLS)?,
            courses: CourseCatalog::from_json(EMBEDDED_COURSES)?,
        })
    }

    pub fn from_dir(dir: &Path) -> Result<Self, CatalogError> {
        let questions_path = dir.join(QUESTIONS_FILE);
        let questions_file = fs::File::open(&questions_path).map_err(|source| CatalogError::Io {
            path: questions_path,
            source,
        })?;

        Ok(Self {
            questions: QuestionBank::from_csv_reader(questions_file)?,
            careers: CareerTable::from_json(&read_to_string(&dir.join(CAREERS_FILE))?)?,
            skills: SkillRequirements::from_json(&read_to_string(
                &dir.join(CAREER_SKILLS_FILE),
            )?)?,
            courses: CourseCatalog::from_json(&read_to_string(&dir.join(COURSES_FILE))?)?,
        })
    }
}

fn read_to_string(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.questions.len(), 24);
        assert_eq!(catalog.careers.len(), 6);
        assert!(catalog.skills.required_skills("Data Scientist").is_some());
        assert!(catalog.courses.len() >= 20);
    }

    #[test]
    fn test_from_dir_matches_embedded_data() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(QUESTIONS_FILE), EMBEDDED_QUESTIONS).unwrap();
        fs::write(dir.path().join(CAREERS_FILE), EMBEDDED_CAREERS).unwrap();
        fs::write(dir.path().join(CAREER_SKILLS_FILE), EMBEDDED_CAREER_SKILLS).unwrap();
        fs::write(dir.path().join(COURSES_FILE), EMBEDDED_COURSES).unwrap();

        let from_dir = Catalog::load(Some(dir.path())).unwrap();
        let embedded = Catalog::embedded().unwrap();
        assert_eq!(from_dir.questions.questions(), embedded.questions.questions());
        assert_eq!(from_dir.courses.courses(), embedded.courses.courses());
    }

    #[test]
    fn test_from_dir_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::from_dir(dir.path()).unwrap_err();
        match err {
            CatalogError::Io { path, .. } => assert!(path.ends_with(QUESTIONS_FILE)),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
