use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::models::AssessmentResult;
use crate::assessment::queries::latest_valid_assessments;
use crate::chat::prompts::{
    CHAT_ASSESSMENT_GUIDANCE, CHAT_CLOSING, CHAT_NO_ASSESSMENTS, CHAT_SYSTEM_BASE,
};
use crate::errors::AppError;
use crate::models::assessment::AssessmentRow;
use crate::models::user::UserRow;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: Uuid,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub message: String,
}

/// POST /api/v1/chat
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("Message is required".to_string()));
    }

    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(req.user_id)
        .fetch_optional(&state.db)
        .await?;
    let user = user.ok_or_else(|| AppError::NotFound(format!("User {} not found", req.user_id)))?;

    let assessments = latest_valid_assessments(&state.db, req.user_id).await?;
    let system = build_system_prompt(&user, &assessments);

    let reply = state
        .llm
        .complete(&req.message, &system)
        .await
        .map_err(|e| AppError::Llm(format!("Chat call failed: {e}")))?;

    Ok(Json(ChatResponse { message: reply }))
}

/// Assembles the counselor system prompt from the user row and any
/// completed assessment results.
fn build_system_prompt(user: &UserRow, assessments: &[AssessmentRow]) -> String {
    let mut prompt = format!(
        "{CHAT_SYSTEM_BASE}\n\nStudent information:\n- Name: {}\n- Grade: {}\n- Role: {}\n",
        user.name, user.grade, user.role
    );

    if assessments.is_empty() {
        prompt.push_str(CHAT_NO_ASSESSMENTS);
    } else {
        prompt.push_str("\nThe student has completed the following assessments:\n");
        for assessment in assessments {
            prompt.push_str(&format!(
                "- {} Assessment (completed on {})\n",
                assessment.assessment_type,
                assessment.completed_at.format("%Y-%m-%d")
            ));
        }

        prompt.push_str("\nHere are the key results from their assessments:\n");
        for assessment in assessments {
            let results: Vec<AssessmentResult> =
                serde_json::from_value(assessment.results.clone()).unwrap_or_default();
            prompt.push_str(&format!(
                "\n{} ASSESSMENT:\n",
                assessment.assessment_type.to_uppercase()
            ));
            for result in results {
                prompt.push_str(&format!(
                    "- {}: {:.0}/100 - {}\n",
                    result.category, result.score, result.description
                ));
            }
        }

        prompt.push_str(CHAT_ASSESSMENT_GUIDANCE);
    }

    prompt.push_str(CHAT_CLOSING);
    prompt
}
