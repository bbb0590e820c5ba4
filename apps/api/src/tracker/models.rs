use serde::{Deserialize, Serialize};

/// Academic term. Stored lowercase on the wire ("fall" / "spring").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    Fall,
    Spring,
}

/// Course rigor level. Drives the additive GPA bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseType {
    #[default]
    Regular,
    Honors,
    Ap,
}

impl CourseType {
    /// Additive bonus on top of the base grade points. Uncapped at 4.0.
    pub fn bonus(self) -> f64 {
        match self {
            CourseType::Regular => 0.0,
            CourseType::Honors => 0.5,
            CourseType::Ap => 1.0,
        }
    }
}

/// Letter grade on the standard 4.0 scale, plus the three
/// non-GPA-impacting grades (Pass, Incomplete, Withdrawal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "P")]
    Pass,
    #[serde(rename = "I")]
    Incomplete,
    #[serde(rename = "W")]
    Withdrawal,
}

impl LetterGrade {
    /// Base grade points, or `None` for grades excluded from every average.
    pub fn points(self) -> Option<f64> {
        match self {
            LetterGrade::APlus | LetterGrade::A => Some(4.0),
            LetterGrade::AMinus => Some(3.7),
            LetterGrade::BPlus => Some(3.3),
            LetterGrade::B => Some(3.0),
            LetterGrade::BMinus => Some(2.7),
            LetterGrade::CPlus => Some(2.3),
            LetterGrade::C => Some(2.0),
            LetterGrade::CMinus => Some(1.7),
            LetterGrade::DPlus => Some(1.3),
            LetterGrade::D => Some(1.0),
            LetterGrade::DMinus => Some(0.7),
            LetterGrade::F => Some(0.0),
            LetterGrade::Pass | LetterGrade::Incomplete | LetterGrade::Withdrawal => None,
        }
    }
}

/// A single course inside a semester. Credits arrive pre-clamped to
/// [0.5, 5] by the request schema; the GPA engine trusts them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub name: String,
    #[serde(default)]
    pub course_type: CourseType,
    pub credits: f64,
    pub semester: Term,
    pub year: i32,
    #[serde(default)]
    pub grade: Option<LetterGrade>,
    #[serde(default)]
    pub completed: bool,
}

/// A term + year bucket of courses. `gpa` is derived, recomputed on every
/// save from the course list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Semester {
    pub term: Term,
    pub year: i32,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub gpa: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_grade_serde_round_trip() {
        let json = r#""A-""#;
        let grade: LetterGrade = serde_json::from_str(json).unwrap();
        assert_eq!(grade, LetterGrade::AMinus);
        assert_eq!(serde_json::to_string(&grade).unwrap(), json);
    }

    #[test]
    fn test_non_gpa_grades_have_no_points() {
        assert_eq!(LetterGrade::Pass.points(), None);
        assert_eq!(LetterGrade::Incomplete.points(), None);
        assert_eq!(LetterGrade::Withdrawal.points(), None);
    }

    #[test]
    fn test_f_is_zero_not_excluded() {
        assert_eq!(LetterGrade::F.points(), Some(0.0));
    }

    #[test]
    fn test_course_type_defaults_to_regular() {
        let json = r#"{
            "name": "Biology",
            "credits": 1.0,
            "semester": "fall",
            "year": 2025
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.course_type, CourseType::Regular);
        assert!(course.grade.is_none());
        assert!(!course.completed);
    }

    #[test]
    fn test_course_uses_camel_case_wire_names() {
        let json = r#"{
            "name": "AP Calculus BC",
            "courseType": "ap",
            "credits": 1.0,
            "semester": "spring",
            "year": 2026,
            "grade": "A",
            "completed": true
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.course_type, CourseType::Ap);
        assert_eq!(course.grade, Some(LetterGrade::A));
    }
}
