use serde::Serialize;

use crate::catalog::Catalog;
use crate::engine::matcher::{match_careers, CareerMatch};
use crate::engine::profile::{build_personality_profile, PersonalityProfile};
use crate::engine::scorer::score_answers;
use crate::models::riasec::DimensionScores;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    /// Career names in match order (or the fallback list).
    pub recommendations: Vec<String>,
    /// Empty when the matcher fell back.
    pub detailed_recommendations: Vec<CareerMatch>,
    pub aptitude: DimensionScores,
    pub personality_profile: PersonalityProfile,
}

pub fn evaluate_quiz<S: AsRef<str>>(answers: &[S], catalog: &Catalog, top_n: usize) -> QuizResult {
    let scores = score_answers(answers, &catalog.questions);
    let matches = match_careers(&scores, &catalog.careers, top_n);

    QuizResult {
        recommendations: matches.career_names(),
        detailed_recommendations: matches.ranked().to_vec(),
        aptitude: scores,
        personality_profile: build_personality_profile(&scores, &catalog.careers),
    }
}
