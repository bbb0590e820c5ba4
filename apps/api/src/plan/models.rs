use serde::{Deserialize, Serialize};

/// Recommendation category for a planned course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Required,
    Elective,
    Advanced,
}

/// Semester placement of a recommended course. Capitalized on the wire
/// ("Fall" / "Spring" / "Both").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanSemester {
    Fall,
    Spring,
    Both,
}

/// High-school grade level, serialized as its numeric year (9-12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GradeYear {
    Freshman = 9,
    Sophomore = 10,
    Junior = 11,
    Senior = 12,
}

impl TryFrom<u8> for GradeYear {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(GradeYear::Freshman),
            10 => Ok(GradeYear::Sophomore),
            11 => Ok(GradeYear::Junior),
            12 => Ok(GradeYear::Senior),
            other => Err(format!("grade year must be 9-12, got {other}")),
        }
    }
}

impl From<GradeYear> for u8 {
    fn from(year: GradeYear) -> u8 {
        year as u8
    }
}

/// One recommended course inside a year bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecommendation {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub course_type: RecommendationType,
    pub year: GradeYear,
    pub semester: PlanSemester,
    pub credits: f64,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

/// Exactly four year buckets. A bucket may be empty, but must be present
/// for the plan to pass structural validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FourYearPlan {
    #[serde(default)]
    pub freshman: Vec<CourseRecommendation>,
    #[serde(default)]
    pub sophomore: Vec<CourseRecommendation>,
    #[serde(default)]
    pub junior: Vec<CourseRecommendation>,
    #[serde(default)]
    pub senior: Vec<CourseRecommendation>,
}

/// The full AI-generated academic plan persisted per learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicPlan {
    pub focus_areas: Vec<String>,
    pub career_alignment: Vec<String>,
    pub four_year_plan: FourYearPlan,
    pub extracurricular_recommendations: Vec<String>,
    pub summer_activities: Vec<String>,
    pub post_graduation_recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_year_accepts_only_9_through_12() {
        let year: GradeYear = serde_json::from_str("11").unwrap();
        assert_eq!(year, GradeYear::Junior);

        let err: Result<GradeYear, _> = serde_json::from_str("8");
        assert!(err.is_err());
        let err: Result<GradeYear, _> = serde_json::from_str("13");
        assert!(err.is_err());
    }

    #[test]
    fn test_grade_year_serializes_numerically() {
        assert_eq!(serde_json::to_string(&GradeYear::Senior).unwrap(), "12");
    }

    #[test]
    fn test_course_recommendation_wire_format() {
        let json = r#"{
            "name": "AP Biology",
            "description": "College-level biology with lab work",
            "type": "advanced",
            "year": 11,
            "semester": "Both",
            "credits": 1,
            "prerequisites": ["Biology", "Chemistry"]
        }"#;
        let rec: CourseRecommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.course_type, RecommendationType::Advanced);
        assert_eq!(rec.year, GradeYear::Junior);
        assert_eq!(rec.semester, PlanSemester::Both);
        assert_eq!(rec.prerequisites.len(), 2);
    }

    #[test]
    fn test_course_recommendation_rejects_unknown_type() {
        let json = r#"{
            "name": "Band",
            "description": "Instrumental music",
            "type": "optional",
            "year": 9,
            "semester": "Fall",
            "credits": 0.5
        }"#;
        let rec: Result<CourseRecommendation, _> = serde_json::from_str(json);
        assert!(rec.is_err());
    }

    #[test]
    fn test_year_buckets_default_to_empty() {
        let plan: FourYearPlan = serde_json::from_str(r#"{"freshman": []}"#).unwrap();
        assert!(plan.sophomore.is_empty());
        assert!(plan.senior.is_empty());
    }
}
