use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A submitted assessment. Superseded submissions of the same type keep
/// their rows but are marked `valid = false`; reads always take the most
/// recent valid row per type.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// "personality" | "skills" | "interests" | "aptitude"
    pub assessment_type: String,
    /// JSONB list of {questionId, response} pairs.
    pub responses: Value,
    /// JSONB list of {category, score, description} results.
    pub results: Value,
    /// JSONB list of AI field-of-study recommendations, if the call
    /// succeeded.
    pub recommendations: Option<Value>,
    pub valid: bool,
    pub completed_at: DateTime<Utc>,
}
