use axum::{
    extract::{Query, State},
    Json,
};

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::routes::UserIdQuery;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<UserRow>, AppError> {
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(params.user_id)
        .fetch_optional(&state.db)
        .await?;

    user.map(Json)
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.user_id)))
}
