use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::models::plan::AcademicPlanRow;
use crate::plan::generator::{generate_plan, GeneratePlanRequest, GeneratePlanResponse};
use crate::routes::UserIdQuery;
use crate::state::AppState;

/// GET /api/v1/plan
pub async fn handle_get_plan(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AcademicPlanRow>, AppError> {
    let row: Option<AcademicPlanRow> =
        sqlx::query_as("SELECT * FROM academic_plans WHERE user_id = $1")
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    row.map(Json)
        .ok_or_else(|| AppError::NotFound("No academic plan has been generated yet".to_string()))
}

/// POST /api/v1/plan/generate
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Json(req): Json<GeneratePlanRequest>,
) -> Result<Json<GeneratePlanResponse>, AppError> {
    let response = generate_plan(&state.db, &state.llm, req.user_id).await?;
    Ok(Json(response))
}
