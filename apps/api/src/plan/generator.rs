//! Plan generation — orchestrates the full pipeline.
//!
//! Flow: load user → require all four valid assessments → build prompt →
//! provider chain → extraction cascade → fallback on failure → upsert.
//!
//! Structural failure of the generated plan is never an error response:
//! the fallback plan is persisted instead and a warning is surfaced.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::analysis::format_assessment_data;
use crate::assessment::models::AssessmentType;
use crate::assessment::queries::latest_valid_assessments;
use crate::errors::AppError;
use crate::llm_client::ProviderChain;
use crate::models::user::UserRow;
use crate::plan::extract::extract_or_fallback;
use crate::plan::fallback::fallback_plan;
use crate::plan::models::AcademicPlan;
use crate::plan::prompts::{PLAN_PROMPT_TEMPLATE, PLAN_SYSTEM};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePlanResponse {
    pub plan: AcademicPlan,
    pub used_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Runs the full plan generation pipeline and persists the result.
pub async fn generate_plan(
    pool: &PgPool,
    llm: &ProviderChain,
    user_id: Uuid,
) -> Result<GeneratePlanResponse, AppError> {
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    let user = user.ok_or_else(|| AppError::NotFound(format!("User {user_id} not found")))?;

    let assessments = latest_valid_assessments(pool, user_id).await?;
    let completed: Vec<&str> = assessments
        .iter()
        .map(|a| a.assessment_type.as_str())
        .collect();
    let missing: Vec<&str> = AssessmentType::ALL
        .iter()
        .map(|t| t.as_str())
        .filter(|t| !completed.contains(t))
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "All assessments must be completed before generating an academic plan (missing: {})",
            missing.join(", ")
        )));
    }

    let grade = user.grade.clamp(9, 12);
    let prompt = PLAN_PROMPT_TEMPLATE
        .replace("{grade}", &grade.to_string())
        .replace("{assessment_data}", &format_assessment_data(&assessments));

    info!("Generating academic plan for user {user_id} (grade {grade})");

    let (plan, used_fallback) = match llm.complete(&prompt, PLAN_SYSTEM).await {
        Ok(text) => extract_or_fallback(&text, grade),
        Err(e) => {
            warn!("Plan generation call failed, substituting fallback plan: {e}");
            (fallback_plan(grade), true)
        }
    };

    let plan_value = serde_json::to_value(&plan)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize plan: {e}")))?;

    sqlx::query(
        r#"
        INSERT INTO academic_plans (id, user_id, plan, used_fallback)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (user_id) DO UPDATE
        SET plan = EXCLUDED.plan,
            used_fallback = EXCLUDED.used_fallback,
            updated_at = NOW()
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&plan_value)
    .bind(used_fallback)
    .execute(pool)
    .await?;

    info!("Academic plan saved for user {user_id} (fallback: {used_fallback})");

    let warning = used_fallback
        .then(|| "Used fallback plan because AI generation or validation failed".to_string());

    Ok(GeneratePlanResponse {
        plan,
        used_fallback,
        warning,
    })
}
