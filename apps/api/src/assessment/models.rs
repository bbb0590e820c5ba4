use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The four questionnaire types. A learner must complete all four before
/// plan generation or the comprehensive analysis can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentType {
    Personality,
    Skills,
    Interests,
    Aptitude,
}

impl AssessmentType {
    pub const ALL: [AssessmentType; 4] = [
        AssessmentType::Personality,
        AssessmentType::Skills,
        AssessmentType::Interests,
        AssessmentType::Aptitude,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssessmentType::Personality => "personality",
            AssessmentType::Skills => "skills",
            AssessmentType::Interests => "interests",
            AssessmentType::Aptitude => "aptitude",
        }
    }

    /// One-line description injected into recommendation prompts.
    pub fn description(self) -> &'static str {
        match self {
            AssessmentType::Interests => {
                "Interest assessment that identifies academic and career preferences."
            }
            AssessmentType::Personality => {
                "Personality assessment that helps understand how traits influence educational paths."
            }
            AssessmentType::Skills => {
                "Skills assessment that identifies technical and soft skill proficiencies."
            }
            AssessmentType::Aptitude => {
                "Aptitude assessment that evaluates inherent abilities and potential in different fields of study."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Scale,
    MultipleChoice,
    OpenEnded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentOption {
    pub id: String,
    pub text: String,
    pub value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentQuestion {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<AssessmentOption>,
}

/// One answer as submitted by the client. `response` is a string or a
/// number depending on the question kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentAnswer {
    pub question_id: String,
    pub question_text: String,
    pub response: Value,
}

/// The trimmed form persisted in the assessments row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResponse {
    pub question_id: String,
    pub response: Value,
}

/// One scored result row derived from a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub category: String,
    /// 0-100, from the recommendation's confidence.
    pub score: f64,
    pub description: String,
}

/// A field-of-study recommendation produced by the LLM on submit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRecommendation {
    pub field_of_study: String,
    pub description: String,
    pub career_paths: Vec<String>,
    pub courses_recommended: Vec<String>,
    pub strengths_highlighted: Vec<String>,
    pub areas_for_growth: Vec<String>,
    /// 0-1 confidence in the recommendation.
    pub confidence_score: f64,
}

/// A career path scraped out of the comprehensive prose analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub title: String,
    pub description: String,
    pub education_requirements: Vec<String>,
    pub major_recommendations: Vec<String>,
}

/// Structured view of the comprehensive analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub career_paths: Vec<CareerPath>,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub recommended_steps: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessment_type_serde_is_lowercase() {
        let t: AssessmentType = serde_json::from_str(r#""aptitude""#).unwrap();
        assert_eq!(t, AssessmentType::Aptitude);
        assert_eq!(serde_json::to_string(&t).unwrap(), r#""aptitude""#);
    }

    #[test]
    fn test_all_covers_every_type() {
        assert_eq!(AssessmentType::ALL.len(), 4);
    }

    #[test]
    fn test_ai_recommendation_wire_format() {
        let json = r#"{
            "fieldOfStudy": "Computer Science",
            "description": "Strong match for analytical responses",
            "careerPaths": ["Software Engineer", "Data Scientist"],
            "coursesRecommended": ["AP Computer Science A"],
            "strengthsHighlighted": ["Logical reasoning"],
            "areasForGrowth": ["Public speaking"],
            "confidenceScore": 0.85
        }"#;
        let rec: AiRecommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.field_of_study, "Computer Science");
        assert!((rec.confidence_score - 0.85).abs() < f64::EPSILON);
    }

    #[test]
    fn test_question_options_omitted_when_empty() {
        let question = AssessmentQuestion {
            id: "teamwork-preference".to_string(),
            text: "I prefer working in teams".to_string(),
            kind: QuestionKind::Scale,
            options: vec![],
        };
        let json = serde_json::to_string(&question).unwrap();
        assert!(!json.contains("options"));
        assert!(json.contains(r#""type":"scale""#));
    }
}
