//! Axum route handlers for the quiz and recommendation API.

use std::collections::HashSet;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::careers::CareerInfo;
use crate::catalog::courses::CourseFilter;
use crate::catalog::questions::ModelInfo;
use crate::engine::pathway::{
    build_learning_pathway, recommend_for_career, CareerCourseRecommendation, LearningPathway,
};
use crate::engine::quiz::{evaluate_quiz, QuizResult};
use crate::engine::scorer::score_answers;
use crate::errors::AppError;
use crate::models::course::Course;
use crate::models::quiz::Question;
use crate::models::riasec::DimensionScores;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
    pub model_info: ModelInfo,
}

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    #[serde(flatten)]
    pub result: QuizResult,
    pub quiz_completed_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CourseRecommendationRequest {
    pub career: String,
    #[serde(default)]
    pub current_skills: Vec<String>,
}

/// Either precomputed `riasec_scores` or raw `answers` must be present.
/// Scores win when both are sent.
#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    #[serde(default)]
    pub user_skills: Vec<String>,
    pub riasec_scores: Option<DimensionScores>,
    pub answers: Option<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/career-questions
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    Json(QuestionsResponse {
        questions: state.catalog.questions.questions().to_vec(),
        model_info: state.catalog.questions.model_info(),
    })
}

/// POST /api/v1/career-recommendations
///
/// Scores the submitted option ids and returns career matches plus the
/// personality profile.
pub async fn handle_career_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<QuizSubmission>, JsonRejection>,
) -> Result<Json<QuizResponse>, AppError> {
    let Json(submission) = payload.map_err(|rejection| {
        tracing::debug!("Rejected quiz submission: {rejection}");
        AppError::Validation("Invalid answers format".to_string())
    })?;

    let result = evaluate_quiz(
        &submission.answers,
        &state.catalog,
        state.config.pathway.top_careers,
    );

    Ok(Json(QuizResponse {
        result,
        quiz_completed_at: Utc::now(),
    }))
}

/// GET /api/v1/career-info/:career
pub async fn handle_career_info(
    State(state): State<AppState>,
    Path(career): Path<String>,
) -> Result<Json<CareerInfo>, AppError> {
    state
        .catalog
        .careers
        .career_info(&career)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Career '{career}' not found")))
}

/// POST /api/v1/course-recommendations
///
/// Skill gap and courses for one named career.
pub async fn handle_course_recommendations(
    State(state): State<AppState>,
    Json(request): Json<CourseRecommendationRequest>,
) -> Result<Json<CareerCourseRecommendation>, AppError> {
    let career = request.career.trim();
    if career.is_empty() {
        return Err(AppError::Validation("career cannot be empty".to_string()));
    }

    let current: HashSet<String> = request.current_skills.into_iter().collect();
    Ok(Json(recommend_for_career(
        career,
        &current,
        &state.catalog,
        &state.config.pathway.course_limits,
    )))
}

/// POST /api/v1/skill-gap
///
/// Full learning pathway across the user's top careers.
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<LearningPathway>, AppError> {
    let scores = match (request.riasec_scores, request.answers) {
        (Some(scores), _) => scores,
        (None, Some(answers)) => score_answers(&answers, &state.catalog.questions),
        (None, None) => {
            return Err(AppError::Validation(
                "Either riasec_scores or answers is required".to_string(),
            ))
        }
    };

    Ok(Json(build_learning_pathway(
        &request.user_skills,
        &scores,
        &state.catalog,
        &state.config.pathway,
    )))
}

/// GET /api/v1/courses?skill=&platform=&level=
pub async fn handle_list_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> Json<Vec<Course>> {
    Json(state.catalog.courses.filter(&filter).into_iter().cloned().collect())
}
