use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One academic plan per learner, replaced wholesale on regeneration.
/// `plan` is the JSONB `AcademicPlan` document; `used_fallback` records
/// whether the stored plan is the static fallback rather than generated
/// content.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AcademicPlanRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub plan: Value,
    pub used_fallback: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
