use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// "student" | "parent" | "counselor" | "admin"
    pub role: String,
    /// Current high-school grade level, 9-12.
    pub grade: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
