//! Field-of-study recommendations — the LLM call made on assessment
//! submit, plus lenient parsing of the returned JSON array.

use serde_json::Value;
use tracing::info;

use crate::assessment::models::{AiRecommendation, AssessmentAnswer, AssessmentType};
use crate::assessment::prompts::{RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, ProviderChain};

/// Asks the provider chain for the top recommended fields of study given
/// one assessment's answers.
pub async fn recommend_fields(
    llm: &ProviderChain,
    assessment_type: AssessmentType,
    answers: &[AssessmentAnswer],
) -> Result<Vec<AiRecommendation>, AppError> {
    let formatted: Vec<Value> = answers
        .iter()
        .map(|a| {
            serde_json::json!({
                "question": a.question_text,
                "answer": a.response,
            })
        })
        .collect();
    let responses_json = serde_json::to_string_pretty(&formatted)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize answers: {e}")))?;

    let prompt = RECOMMENDATION_PROMPT_TEMPLATE
        .replace("{assessment_description}", assessment_type.description())
        .replace("{responses_json}", &responses_json);

    let text = llm
        .complete(&prompt, RECOMMENDATION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Recommendation call failed: {e}")))?;

    let recommendations = parse_recommendations(&text).ok_or_else(|| {
        AppError::Llm("Recommendation response contained no parseable JSON array".to_string())
    })?;

    info!(
        "Received {} field recommendations for {} assessment",
        recommendations.len(),
        assessment_type.as_str()
    );

    Ok(recommendations)
}

/// Parses a recommendation array out of model output. Accepts a bare
/// array, an object wrapping it under "recommendations", or an array
/// embedded in surrounding prose.
pub fn parse_recommendations(text: &str) -> Option<Vec<AiRecommendation>> {
    let text = strip_json_fences(text);

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        if let Some(recs) = coerce_recommendations(value) {
            return Some(recs);
        }
    }

    let span = bracket_span(text)?;
    serde_json::from_str::<Value>(span)
        .ok()
        .and_then(coerce_recommendations)
}

fn coerce_recommendations(value: Value) -> Option<Vec<AiRecommendation>> {
    let array = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map.remove("recommendations")?,
        _ => return None,
    };
    serde_json::from_value(array).ok()
}

/// The span from the first `[` through the last `]`, if both exist.
fn bracket_span(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    (end > start).then(|| &text[start..=end])
}
