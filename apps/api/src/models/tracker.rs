use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One tracker per learner. `semesters` is the JSONB semester list;
/// `cumulative_gpa` and `total_credits` are caches recomputed from it on
/// every save.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CourseTrackerRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub semesters: Value,
    pub cumulative_gpa: f64,
    pub total_credits: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
