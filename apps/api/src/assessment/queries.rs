use sqlx::PgPool;
use uuid::Uuid;

use crate::models::assessment::AssessmentRow;

/// The most recent valid submission for each assessment type.
pub async fn latest_valid_assessments(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<AssessmentRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT DISTINCT ON (assessment_type) *
        FROM assessments
        WHERE user_id = $1 AND valid = TRUE
        ORDER BY assessment_type, completed_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// The most recent valid submission of one type, if any.
pub async fn latest_valid_of_type(
    pool: &PgPool,
    user_id: Uuid,
    assessment_type: &str,
) -> Result<Option<AssessmentRow>, sqlx::Error> {
    sqlx::query_as(
        r#"
        SELECT * FROM assessments
        WHERE user_id = $1 AND assessment_type = $2 AND valid = TRUE
        ORDER BY completed_at DESC
        LIMIT 1
        "#,
    )
    .bind(user_id)
    .bind(assessment_type)
    .fetch_optional(pool)
    .await
}
