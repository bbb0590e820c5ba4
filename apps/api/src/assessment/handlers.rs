use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::assessment::analysis::{build_report, fallback_report, format_assessment_data};
use crate::assessment::models::{
    AiRecommendation, AnalysisReport, AssessmentAnswer, AssessmentQuestion, AssessmentResult,
    AssessmentType, StoredResponse,
};
use crate::assessment::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::assessment::queries::{latest_valid_assessments, latest_valid_of_type};
use crate::assessment::questions::question_bank;
use crate::assessment::recommendations::recommend_fields;
use crate::errors::AppError;
use crate::models::assessment::AssessmentRow;
use crate::routes::UserIdQuery;
use crate::state::AppState;

/// GET /api/v1/assessments/questions/:atype
pub async fn handle_get_questions(
    Path(assessment_type): Path<AssessmentType>,
) -> Json<Vec<AssessmentQuestion>> {
    Json(question_bank(assessment_type))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub responses: Vec<AssessmentAnswer>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSummary {
    #[serde(rename = "type")]
    pub assessment_type: AssessmentType,
    pub completed_at: DateTime<Utc>,
    pub top_results: Vec<AiRecommendation>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub message: String,
    pub assessment_id: Uuid,
    pub summary: SubmitSummary,
}

/// POST /api/v1/assessments/submit
/// Scores the submission via the provider chain and stores it, marking any
/// previous submission of the same type invalid.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, AppError> {
    if req.responses.is_empty() {
        return Err(AppError::Validation(
            "Assessment responses are required".to_string(),
        ));
    }

    let recommendations = recommend_fields(&state.llm, req.assessment_type, &req.responses).await?;

    let results: Vec<AssessmentResult> = recommendations
        .iter()
        .map(|rec| AssessmentResult {
            category: rec.field_of_study.clone(),
            score: rec.confidence_score * 100.0,
            description: rec.description.clone(),
        })
        .collect();

    let stored: Vec<StoredResponse> = req
        .responses
        .iter()
        .map(|answer| StoredResponse {
            question_id: answer.question_id.clone(),
            response: answer.response.clone(),
        })
        .collect();

    let assessment_id = Uuid::new_v4();
    let serialize_err =
        |e: serde_json::Error| AppError::Internal(anyhow::anyhow!("Failed to serialize: {e}"));
    let responses_value = serde_json::to_value(&stored).map_err(serialize_err)?;
    let results_value = serde_json::to_value(&results).map_err(serialize_err)?;
    let recommendations_value = serde_json::to_value(&recommendations).map_err(serialize_err)?;

    let mut tx = state.db.begin().await?;

    sqlx::query("UPDATE assessments SET valid = FALSE WHERE user_id = $1 AND assessment_type = $2")
        .bind(req.user_id)
        .bind(req.assessment_type.as_str())
        .execute(&mut *tx)
        .await?;

    let row: AssessmentRow = sqlx::query_as(
        r#"
        INSERT INTO assessments
            (id, user_id, assessment_type, responses, results, recommendations, valid)
        VALUES ($1, $2, $3, $4, $5, $6, TRUE)
        RETURNING *
        "#,
    )
    .bind(assessment_id)
    .bind(req.user_id)
    .bind(req.assessment_type.as_str())
    .bind(&responses_value)
    .bind(&results_value)
    .bind(&recommendations_value)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    info!(
        "Assessment {} submitted for user {} ({} responses)",
        req.assessment_type.as_str(),
        req.user_id,
        req.responses.len()
    );

    Ok(Json(SubmitResponse {
        message: "Assessment submitted successfully".to_string(),
        assessment_id,
        summary: SubmitSummary {
            assessment_type: req.assessment_type,
            completed_at: row.completed_at,
            top_results: recommendations.into_iter().take(3).collect(),
        },
    }))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub completed_assessments: Vec<String>,
    pub required_assessments: Vec<String>,
    pub all_completed: bool,
}

/// GET /api/v1/assessments/status
pub async fn handle_status(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<StatusResponse>, AppError> {
    let rows = latest_valid_assessments(&state.db, params.user_id).await?;
    let completed: Vec<String> = rows.into_iter().map(|r| r.assessment_type).collect();
    let required: Vec<String> = AssessmentType::ALL
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();
    let all_completed = required.iter().all(|t| completed.contains(t));

    Ok(Json(StatusResponse {
        completed_assessments: completed,
        required_assessments: required,
        all_completed,
    }))
}

/// GET /api/v1/assessments/results/:atype
pub async fn handle_get_results(
    State(state): State<AppState>,
    Path(assessment_type): Path<AssessmentType>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AssessmentRow>, AppError> {
    latest_valid_of_type(&state.db, params.user_id, assessment_type.as_str())
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No completed {} assessment found",
                assessment_type.as_str()
            ))
        })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComprehensiveResponse {
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub completed_assessments: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required_assessments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisReport>,
}

/// GET /api/v1/assessments/comprehensive
/// Runs the prose analysis over all four assessments. Provider failure is
/// absorbed by the static fallback report, never surfaced as an error.
pub async fn handle_comprehensive(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ComprehensiveResponse>, AppError> {
    let rows = latest_valid_assessments(&state.db, params.user_id).await?;
    let completed: Vec<String> = rows.iter().map(|r| r.assessment_type.clone()).collect();
    let required: Vec<String> = AssessmentType::ALL
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();

    if !required.iter().all(|t| completed.contains(t)) {
        return Ok(Json(ComprehensiveResponse {
            completed: false,
            message: Some("Not all required assessments are completed".to_string()),
            completed_assessments: completed,
            required_assessments: required,
            analysis: None,
        }));
    }

    let prompt = ANALYSIS_PROMPT_TEMPLATE.replace("{assessment_data}", &format_assessment_data(&rows));

    let analysis = match state.llm.complete(&prompt, ANALYSIS_SYSTEM).await {
        Ok(text) => build_report(&text),
        Err(e) => {
            warn!("Comprehensive analysis call failed, using fallback report: {e}");
            fallback_report()
        }
    };

    Ok(Json(ComprehensiveResponse {
        completed: true,
        message: None,
        completed_assessments: completed,
        required_assessments: vec![],
        analysis: Some(analysis),
    }))
}
