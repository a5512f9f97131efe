//! Question bank: the RIASEC quiz catalog, loaded from CSV.
//!
//! One CSV row per answer option:
//! `questionId,questionText,category,dimension,optionId,optionText,R,I,A,S,E,C`.
//! Rows sharing a `questionId` are grouped (file order) into one question.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;
use crate::models::quiz::{Question, QuestionOption};
use crate::models::riasec::{Dimension, DimensionScores, PerDimension};

pub const MODEL_VERSION: &str = "1.0";

#[derive(Debug, Deserialize)]
struct QuestionRow {
    #[serde(rename = "questionId")]
    question_id: String,
    #[serde(rename = "questionText")]
    question_text: String,
    category: String,
    dimension: Dimension,
    #[serde(rename = "optionId")]
    option_id: String,
    #[serde(rename = "optionText")]
    option_text: String,
    #[serde(rename = "R")]
    r: Option<i64>,
    #[serde(rename = "I")]
    i: Option<i64>,
    #[serde(rename = "A")]
    a: Option<i64>,
    #[serde(rename = "S")]
    s: Option<i64>,
    #[serde(rename = "E")]
    e: Option<i64>,
    #[serde(rename = "C")]
    c: Option<i64>,
}

impl QuestionRow {
    fn scores(&self) -> Result<DimensionScores, CatalogError> {
        let raw = PerDimension {
            realistic: self.r,
            investigative: self.i,
            artistic: self.a,
            social: self.s,
            enterprising: self.e,
            conventional: self.c,
        };

        let mut scores = DimensionScores::default();
        for (dimension, value) in raw.iter() {
            // Empty cells count as 0.
            let value = value.unwrap_or(0);
            *scores.get_mut(dimension) = u32::try_from(value).map_err(|_| {
                CatalogError::Invalid(format!(
                    "option '{}' has out-of-range {} score {value}",
                    self.option_id, dimension
                ))
            })?;
        }
        Ok(scores)
    }
}

/// Summary of the loaded bank, served alongside the questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub version: String,
    pub total_questions: usize,
    pub categories: Vec<String>,
    pub riasec_distribution: PerDimension<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Builds a bank from already-parsed questions.
    /// Option ids must be unique across the whole bank.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for question in &questions {
            for option in &question.options {
                if !seen.insert(option.id.as_str()) {
                    return Err(CatalogError::Invalid(format!(
                        "duplicate option id '{}' (question '{}')",
                        option.id, question.id
                    )));
                }
            }
        }
        Ok(Self { questions })
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut questions: Vec<Question> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in rdr.deserialize() {
            let row: QuestionRow = record?;
            let option = QuestionOption {
                id: row.option_id.clone(),
                text: row.option_text.clone(),
                scores: row.scores()?,
            };

            match index.get(&row.question_id) {
                Some(&position) => questions[position].options.push(option),
                None => {
                    index.insert(row.question_id.clone(), questions.len());
                    questions.push(Question {
                        id: row.question_id,
                        text: row.question_text,
                        category: row.category,
                        dimension: row.dimension,
                        options: vec![option],
                    });
                }
            }
        }

        Self::new(questions)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// First option with this id, scanning questions in bank order.
    pub fn find_option(&self, option_id: &str) -> Option<&QuestionOption> {
        self.questions
            .iter()
            .find_map(|q| q.options.iter().find(|o| o.id == option_id))
    }

    pub fn model_info(&self) -> ModelInfo {
        let categories: BTreeSet<&str> =
            self.questions.iter().map(|q| q.category.as_str()).collect();

        ModelInfo {
            version: MODEL_VERSION.to_string(),
            total_questions: self.questions.len(),
            categories: categories.into_iter().map(str::to_string).collect(),
            riasec_distribution: PerDimension::from_fn(|d| {
                self.questions.iter().filter(|q| q.dimension == d).count()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "questionId,questionText,category,dimension,optionId,optionText,R,I,A,S,E,C\n";

    fn load(body: &str) -> Result<QuestionBank, CatalogError> {
        QuestionBank::from_csv_reader(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn test_rows_group_into_questions_in_file_order() {
        let bank = load(
            "r1,Tools,psychometric,R,r1_a,Agree,5,0,0,0,0,1\n\
             r1,Tools,psychometric,R,r1_b,Disagree,0,0,0,1,0,0\n\
             i1,Puzzles,aptitude,I,i1_a,Agree,0,4,0,0,0,0\n",
        )
        .unwrap();

        assert_eq!(bank.len(), 2);
        let first = &bank.questions()[0];
        assert_eq!(first.id, "r1");
        assert_eq!(first.dimension, Dimension::Realistic);
        assert_eq!(first.options.len(), 2);
        assert_eq!(first.options[0].scores.realistic, 5);
        assert_eq!(first.options[0].scores.conventional, 1);
        assert_eq!(bank.questions()[1].dimension, Dimension::Investigative);
    }

    #[test]
    fn test_empty_score_cells_count_as_zero() {
        let bank = load("a1,Draw,interest,A,a1_a,Agree,,,3,,,\n").unwrap();
        let option = bank.find_option("a1_a").unwrap();
        assert_eq!(option.scores.artistic, 3);
        assert_eq!(option.scores.total(), 3);
    }

    #[test]
    fn test_negative_score_is_invalid() {
        let err = load("a1,Draw,interest,A,a1_a,Agree,0,0,-2,0,0,0\n").unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_unknown_dimension_is_csv_error() {
        let err = load("x1,Odd,interest,X,x1_a,Agree,0,0,0,0,0,0\n").unwrap_err();
        assert!(matches!(err, CatalogError::Csv(_)));
    }

    #[test]
    fn test_duplicate_option_id_across_questions_is_rejected() {
        let err = load(
            "r1,Tools,psychometric,R,shared,Agree,5,0,0,0,0,0\n\
             i1,Puzzles,aptitude,I,shared,Agree,0,4,0,0,0,0\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("shared"));
    }

    #[test]
    fn test_find_option_unknown_is_none() {
        let bank = load("r1,Tools,psychometric,R,r1_a,Agree,5,0,0,0,0,0\n").unwrap();
        assert!(bank.find_option("nope").is_none());
    }

    #[test]
    fn test_model_info_counts_per_dimension() {
        let bank = load(
            "r1,Tools,psychometric,R,r1_a,Agree,5,0,0,0,0,0\n\
             r2,Outdoors,psychometric,R,r2_a,Agree,4,0,0,0,0,0\n\
             s1,Helping,interest,S,s1_a,Agree,0,0,0,5,0,0\n",
        )
        .unwrap();
        let info = bank.model_info();
        assert_eq!(info.version, MODEL_VERSION);
        assert_eq!(info.total_questions, 3);
        assert_eq!(info.categories, vec!["interest", "psychometric"]);
        assert_eq!(info.riasec_distribution.realistic, 2);
        assert_eq!(info.riasec_distribution.social, 1);
        assert_eq!(info.riasec_distribution.conventional, 0);
    }
}
