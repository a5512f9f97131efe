pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::engine::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Quiz
        .route(
            "/api/v1/career-questions",
            get(handlers::handle_get_questions),
        )
        .route(
            "/api/v1/career-recommendations",
            post(handlers::handle_career_recommendations),
        )
        // Careers and skill gaps
        .route(
            "/api/v1/career-info/:career",
            get(handlers::handle_career_info),
        )
        .route(
            "/api/v1/course-recommendations",
            post(handlers::handle_course_recommendations),
        )
        .route("/api/v1/skill-gap", post(handlers::handle_skill_gap))
        // Course catalog
        .route("/api/v1/courses", get(handlers::handle_list_courses))
        .with_state(state)
}
