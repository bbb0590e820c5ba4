use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::tracker::CourseTrackerRow;
use crate::routes::UserIdQuery;
use crate::state::AppState;
use crate::tracker::gpa::compute_all_gpas;
use crate::tracker::models::Semester;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerResponse {
    pub course_tracker: CourseTrackerRow,
    pub cumulative_gpa: f64,
    pub total_credits: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrackerRequest {
    pub user_id: Uuid,
    pub semesters: Vec<Semester>,
}

/// GET /api/v1/tracker
/// Returns the caller's tracker, creating an empty one on first access.
pub async fn handle_get_tracker(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<TrackerResponse>, AppError> {
    let existing: Option<CourseTrackerRow> =
        sqlx::query_as("SELECT * FROM course_trackers WHERE user_id = $1")
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    let tracker = match existing {
        Some(tracker) => tracker,
        None => {
            sqlx::query_as(
                r#"
                INSERT INTO course_trackers (id, user_id, semesters, cumulative_gpa, total_credits)
                VALUES ($1, $2, '[]'::jsonb, 0, 0)
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(params.user_id)
            .fetch_one(&state.db)
            .await?
        }
    };

    let cumulative_gpa = tracker.cumulative_gpa;
    let total_credits = tracker.total_credits;
    Ok(Json(TrackerResponse {
        course_tracker: tracker,
        cumulative_gpa,
        total_credits,
    }))
}

/// PUT /api/v1/tracker
/// Replaces the semester list. GPA figures are always recomputed here —
/// client-supplied `gpa` values are overwritten, never trusted.
pub async fn handle_update_tracker(
    State(state): State<AppState>,
    Json(req): Json<UpdateTrackerRequest>,
) -> Result<Json<TrackerResponse>, AppError> {
    let rollup = compute_all_gpas(req.semesters);

    let semesters_value = serde_json::to_value(&rollup.semesters)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize semesters: {e}")))?;

    let tracker: CourseTrackerRow = sqlx::query_as(
        r#"
        INSERT INTO course_trackers (id, user_id, semesters, cumulative_gpa, total_credits)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id) DO UPDATE
        SET semesters = EXCLUDED.semesters,
            cumulative_gpa = EXCLUDED.cumulative_gpa,
            total_credits = EXCLUDED.total_credits,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.user_id)
    .bind(&semesters_value)
    .bind(rollup.cumulative_gpa)
    .bind(rollup.total_credits)
    .fetch_one(&state.db)
    .await?;

    info!(
        "Tracker updated for user {}: {} semesters, cumulative GPA {:.2}, {} credits",
        req.user_id,
        rollup.semesters.len(),
        rollup.cumulative_gpa,
        rollup.total_credits
    );

    Ok(Json(TrackerResponse {
        cumulative_gpa: tracker.cumulative_gpa,
        total_credits: tracker.total_credits,
        course_tracker: tracker,
    }))
}
