use serde::{Deserialize, Serialize};

use crate::models::riasec::{Dimension, DimensionScores};

/// A quiz item. Immutable once the question bank is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub category: String,
    pub dimension: Dimension,
    pub options: Vec<QuestionOption>,
}

/// An answer option. `scores` may be non-zero on any dimension,
/// not only the parent question's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    pub scores: DimensionScores,
}
