//! Plan extraction — turns raw model output into a structurally valid
//! `AcademicPlan`, falling back to the static plan when every parse
//! strategy fails.
//!
//! Parse attempts, in order, each a fallback for the previous:
//! 1. the whole response as JSON;
//! 2. the span from the first `{` through the last `}`;
//! 3. that span with `//` and `/* */` comments and trailing commas
//!    stripped (string literals respected).
//!
//! A parsed object is valid iff all six top-level fields are present and
//! `fourYearPlan` carries all four year buckets. Failure is never fatal:
//! the caller substitutes the fallback plan and surfaces a warning.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::llm_client::strip_json_fences;
use crate::plan::fallback::fallback_plan;
use crate::plan::models::AcademicPlan;

const REQUIRED_FIELDS: &[&str] = &[
    "focusAreas",
    "careerAlignment",
    "fourYearPlan",
    "extracurricularRecommendations",
    "summerActivities",
    "postGraduationRecommendations",
];

const YEAR_BUCKETS: &[&str] = &["freshman", "sophomore", "junior", "senior"];

#[derive(Debug, Error)]
pub enum PlanParseFailure {
    #[error("no parse strategy produced JSON: {0}")]
    Unparseable(serde_json::Error),

    #[error("plan is missing required fields: {0}")]
    MissingFields(String),

    #[error("plan JSON failed schema decode: {0}")]
    Schema(serde_json::Error),
}

/// Runs the extraction cascade and structural validation.
pub fn extract_plan(text: &str) -> Result<AcademicPlan, PlanParseFailure> {
    let value = parse_lenient(text)?;
    check_structure(&value)?;
    serde_json::from_value(value).map_err(PlanParseFailure::Schema)
}

/// Extraction with fallback substitution: returns the parsed plan, or the
/// static plan for `grade` when extraction fails, plus a flag indicating
/// the fallback was used.
pub fn extract_or_fallback(text: &str, grade: i16) -> (AcademicPlan, bool) {
    match extract_plan(text) {
        Ok(plan) => (plan, false),
        Err(failure) => {
            warn!("Plan extraction failed, substituting fallback plan: {failure}");
            (fallback_plan(grade), true)
        }
    }
}

fn parse_lenient(text: &str) -> Result<Value, PlanParseFailure> {
    let text = strip_json_fences(text);

    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    let span = brace_span(text).unwrap_or(text);
    if let Ok(value) = serde_json::from_str::<Value>(span) {
        return Ok(value);
    }

    let cleaned = strip_comments_and_trailing_commas(span);
    serde_json::from_str(&cleaned).map_err(PlanParseFailure::Unparseable)
}

/// The span from the first `{` through the last `}`, if both exist.
fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Removes `//` and `/* */` comments and trailing commas, leaving string
/// literal contents untouched.
fn strip_comments_and_trailing_commas(text: &str) -> String {
    let mut without_comments = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            without_comments.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                without_comments.push(c);
            }
            '/' => match chars.peek() {
                Some('/') => {
                    while let Some(&next) = chars.peek() {
                        if next == '\n' {
                            break;
                        }
                        chars.next();
                    }
                }
                Some('*') => {
                    chars.next();
                    let mut prev = '\0';
                    for next in chars.by_ref() {
                        if prev == '*' && next == '/' {
                            break;
                        }
                        prev = next;
                    }
                }
                _ => without_comments.push(c),
            },
            _ => without_comments.push(c),
        }
    }

    let mut cleaned = String::with_capacity(without_comments.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in without_comments.chars() {
        if in_string {
            cleaned.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if c == '"' {
            in_string = true;
        } else if c == '}' || c == ']' {
            let trimmed = cleaned.trim_end().len();
            if cleaned[..trimmed].ends_with(',') {
                cleaned.truncate(trimmed - 1);
            }
        }
        cleaned.push(c);
    }

    cleaned
}

fn check_structure(value: &Value) -> Result<(), PlanParseFailure> {
    let object = value
        .as_object()
        .ok_or_else(|| PlanParseFailure::MissingFields("response is not a JSON object".to_string()))?;

    let mut missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !object.contains_key(**field))
        .copied()
        .collect();

    match object.get("fourYearPlan").and_then(Value::as_object) {
        Some(plan) => {
            missing.extend(YEAR_BUCKETS.iter().filter(|year| !plan.contains_key(**year)));
        }
        None => {
            if object.contains_key("fourYearPlan") {
                missing.extend(YEAR_BUCKETS);
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PlanParseFailure::MissingFields(missing.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_PLAN: &str = r#"{
        "focusAreas": ["STEM", "Writing", "Leadership"],
        "careerAlignment": ["Software Engineering", "Data Science", "Research"],
        "fourYearPlan": {
            "freshman": [
                {
                    "name": "Algebra I",
                    "description": "Core mathematics",
                    "type": "required",
                    "year": 9,
                    "semester": "Both",
                    "credits": 1,
                    "prerequisites": []
                }
            ],
            "sophomore": [],
            "junior": [],
            "senior": []
        },
        "extracurricularRecommendations": ["Math Club"],
        "summerActivities": ["Coding camp"],
        "postGraduationRecommendations": ["Apply to engineering programs"]
    }"#;

    #[test]
    fn test_valid_json_parses_directly() {
        let plan = extract_plan(VALID_PLAN).unwrap();
        assert_eq!(plan.focus_areas.len(), 3);
        assert_eq!(plan.four_year_plan.freshman.len(), 1);
        assert!(plan.four_year_plan.senior.is_empty());
    }

    #[test]
    fn test_valid_json_does_not_fall_back() {
        let (plan, used_fallback) = extract_or_fallback(VALID_PLAN, 9);
        assert!(!used_fallback);
        assert_eq!(plan.career_alignment[0], "Software Engineering");
    }

    #[test]
    fn test_json_embedded_in_prose_is_extracted() {
        let wrapped = format!(
            "Here is the academic plan you asked for:\n\n{VALID_PLAN}\n\nLet me know if you'd like adjustments."
        );
        let (plan, used_fallback) = extract_or_fallback(&wrapped, 10);
        assert!(!used_fallback);
        assert_eq!(plan.focus_areas[0], "STEM");
    }

    #[test]
    fn test_fenced_json_is_extracted() {
        let fenced = format!("```json\n{VALID_PLAN}\n```");
        assert!(extract_plan(&fenced).is_ok());
    }

    #[test]
    fn test_comments_and_trailing_commas_are_repaired() {
        let dirty = r#"{
            // the student's main areas
            "focusAreas": ["STEM",],
            "careerAlignment": ["Engineering"], /* aligned careers */
            "fourYearPlan": {
                "freshman": [],
                "sophomore": [],
                "junior": [],
                "senior": [],
            },
            "extracurricularRecommendations": ["Robotics"],
            "summerActivities": ["Internship"],
            "postGraduationRecommendations": ["University"],
        }"#;
        let plan = extract_plan(dirty).unwrap();
        assert_eq!(plan.focus_areas, vec!["STEM".to_string()]);
    }

    #[test]
    fn test_comment_markers_inside_strings_survive() {
        let text = r#"{
            "focusAreas": ["https://example.com/stem, and more"],
            "careerAlignment": ["A /* not a comment */ path"],
            "fourYearPlan": {"freshman": [], "sophomore": [], "junior": [], "senior": []},
            "extracurricularRecommendations": [],
            "summerActivities": [],
            "postGraduationRecommendations": [],
        }"#;
        let plan = extract_plan(text).unwrap();
        assert_eq!(plan.focus_areas[0], "https://example.com/stem, and more");
        assert_eq!(plan.career_alignment[0], "A /* not a comment */ path");
    }

    #[test]
    fn test_garbage_falls_back_with_all_buckets_populated() {
        let (plan, used_fallback) = extract_or_fallback("I'm sorry, I can't produce a plan.", 9);
        assert!(used_fallback);
        assert!(!plan.four_year_plan.freshman.is_empty());
        assert!(!plan.four_year_plan.sophomore.is_empty());
        assert!(!plan.four_year_plan.junior.is_empty());
        assert!(!plan.four_year_plan.senior.is_empty());
    }

    #[test]
    fn test_missing_top_level_field_falls_back() {
        let missing = r#"{
            "focusAreas": ["STEM"],
            "careerAlignment": ["Engineering"],
            "fourYearPlan": {"freshman": [], "sophomore": [], "junior": [], "senior": []},
            "extracurricularRecommendations": [],
            "summerActivities": []
        }"#;
        let err = extract_plan(missing).unwrap_err();
        assert!(matches!(err, PlanParseFailure::MissingFields(ref m) if m.contains("postGraduationRecommendations")));

        let (_, used_fallback) = extract_or_fallback(missing, 11);
        assert!(used_fallback);
    }

    #[test]
    fn test_missing_year_bucket_falls_back() {
        let missing_year = r#"{
            "focusAreas": ["STEM"],
            "careerAlignment": ["Engineering"],
            "fourYearPlan": {"freshman": [], "sophomore": [], "junior": []},
            "extracurricularRecommendations": [],
            "summerActivities": [],
            "postGraduationRecommendations": []
        }"#;
        let err = extract_plan(missing_year).unwrap_err();
        assert!(matches!(err, PlanParseFailure::MissingFields(ref m) if m.contains("senior")));
    }

    #[test]
    fn test_out_of_enumeration_course_falls_back() {
        // Schema enforcement at the boundary: a course with year 13 is a
        // parse failure, not a silently-persisted invalid plan.
        let bad_year = VALID_PLAN.replace("\"year\": 9", "\"year\": 13");
        assert!(matches!(
            extract_plan(&bad_year).unwrap_err(),
            PlanParseFailure::Schema(_)
        ));
    }

    #[test]
    fn test_non_object_json_is_invalid() {
        let err = extract_plan("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, PlanParseFailure::MissingFields(_)));
    }
}
