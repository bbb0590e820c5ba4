pub mod health;
pub mod profile;

use axum::{
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::state::AppState;
use crate::{assessment, chat, plan, tracker};

/// Caller identity, resolved upstream by the auth layer and passed through
/// as a query parameter on reads.
#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Profile
        .route("/api/v1/profile", get(profile::handle_get_profile))
        // Course tracker
        .route(
            "/api/v1/tracker",
            get(tracker::handlers::handle_get_tracker).put(tracker::handlers::handle_update_tracker),
        )
        // Academic plan
        .route("/api/v1/plan", get(plan::handlers::handle_get_plan))
        .route("/api/v1/plan/generate", post(plan::handlers::handle_generate_plan))
        // Assessments
        .route(
            "/api/v1/assessments/questions/:atype",
            get(assessment::handlers::handle_get_questions),
        )
        .route(
            "/api/v1/assessments/submit",
            post(assessment::handlers::handle_submit),
        )
        .route(
            "/api/v1/assessments/status",
            get(assessment::handlers::handle_status),
        )
        .route(
            "/api/v1/assessments/results/:atype",
            get(assessment::handlers::handle_get_results),
        )
        .route(
            "/api/v1/assessments/comprehensive",
            get(assessment::handlers::handle_comprehensive),
        )
        // Advisor chat
        .route("/api/v1/chat", post(chat::handlers::handle_chat))
        .with_state(state)
}
