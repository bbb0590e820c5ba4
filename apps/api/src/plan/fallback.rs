//! Static fallback plan, substituted when AI generation or extraction
//! fails. Keyed only by the learner's current grade level; every year
//! bucket is always populated.

use crate::plan::models::{
    AcademicPlan, CourseRecommendation, FourYearPlan, GradeYear, PlanSemester, RecommendationType,
};

/// Hand-authored plan for a learner currently in `grade` (clamped to 9-12).
pub fn fallback_plan(grade: i16) -> AcademicPlan {
    let year_labels = ["freshman", "sophomore", "junior", "senior"];
    let current_year_label = year_labels[(grade.clamp(9, 12) - 9) as usize];

    AcademicPlan {
        focus_areas: vec![
            "Mathematics and Quantitative Skills".to_string(),
            "Communication and Writing".to_string(),
            "Critical Thinking and Problem Solving".to_string(),
            "Technology and Digital Literacy".to_string(),
            "Interpersonal Skills and Collaboration".to_string(),
        ],
        career_alignment: vec![
            "Computer Science/Software Development".to_string(),
            "Business Administration/Management".to_string(),
            "Engineering".to_string(),
            "Healthcare/Medicine".to_string(),
            "Education/Teaching".to_string(),
        ],
        four_year_plan: FourYearPlan {
            freshman: default_courses_for_year(GradeYear::Freshman),
            sophomore: default_courses_for_year(GradeYear::Sophomore),
            junior: default_courses_for_year(GradeYear::Junior),
            senior: default_courses_for_year(GradeYear::Senior),
        },
        extracurricular_recommendations: vec![
            "Student Government or Leadership Club".to_string(),
            "Academic Competition Team (Debate, Math, Science Olympiad)".to_string(),
            "Community Service Organization".to_string(),
            "Sports Team or Athletic Club".to_string(),
            "Arts Program (Music, Theater, Visual Arts)".to_string(),
            "Career-Oriented Club (Business, Engineering, Health)".to_string(),
        ],
        summer_activities: vec![
            format!("Summer courses at local community college (focus on {current_year_label} preparation)"),
            "Volunteer work in areas aligned with career interests".to_string(),
            "Summer internship or job shadowing".to_string(),
            "Academic enrichment program or camp".to_string(),
            "Self-directed project or portfolio development".to_string(),
        ],
        post_graduation_recommendations: vec![
            "Apply to 4-year colleges with strong programs in areas of interest".to_string(),
            "Consider gap year opportunities for skill development".to_string(),
            "Explore internship possibilities in chosen career fields".to_string(),
            "Research scholarship opportunities based on academic achievements".to_string(),
            "Develop a backup plan including community college pathway options".to_string(),
        ],
    }
}

fn rec(
    name: &str,
    description: &str,
    course_type: RecommendationType,
    year: GradeYear,
    semester: PlanSemester,
    credits: f64,
    prerequisites: &[&str],
) -> CourseRecommendation {
    CourseRecommendation {
        name: name.to_string(),
        description: description.to_string(),
        course_type,
        year,
        semester,
        credits,
        prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
    }
}

fn default_courses_for_year(year: GradeYear) -> Vec<CourseRecommendation> {
    use GradeYear::*;
    use PlanSemester::*;
    use RecommendationType::*;

    match year {
        Freshman => vec![
            rec(
                "English 9",
                "Foundational English course covering literature, writing, and communication skills",
                Required, Freshman, Fall, 1.0, &[],
            ),
            rec(
                "Algebra I or Geometry",
                "Core mathematics course focusing on algebraic concepts or geometric principles",
                Required, Freshman, Both, 1.0, &[],
            ),
            rec(
                "Biology",
                "Introduction to biological concepts and scientific methods",
                Required, Freshman, Both, 1.0, &[],
            ),
            rec(
                "World History",
                "Survey of major historical developments across global civilizations",
                Required, Freshman, Both, 1.0, &[],
            ),
            rec(
                "Physical Education",
                "Development of physical fitness, health, and team sports skills",
                Required, Freshman, Both, 0.5, &[],
            ),
            rec(
                "Foreign Language I",
                "Introduction to a foreign language and its associated cultures",
                Elective, Freshman, Both, 1.0, &[],
            ),
        ],
        Sophomore => vec![
            rec(
                "English 10",
                "Continued development of literary analysis and composition skills",
                Required, Sophomore, Fall, 1.0, &["English 9"],
            ),
            rec(
                "Geometry or Algebra II",
                "Advanced mathematical concepts building on previous coursework",
                Required, Sophomore, Both, 1.0, &["Algebra I"],
            ),
            rec(
                "Chemistry",
                "Study of matter, its properties, and the interactions between substances",
                Required, Sophomore, Both, 1.0, &["Biology"],
            ),
            rec(
                "U.S. History",
                "Comprehensive study of American history and its impact on modern society",
                Required, Sophomore, Both, 1.0, &[],
            ),
            rec(
                "Foreign Language II",
                "Continued study of foreign language with emphasis on conversation and composition",
                Elective, Sophomore, Both, 1.0, &["Foreign Language I"],
            ),
            rec(
                "Fine Arts Elective",
                "Introduction to artistic expression through various media",
                Elective, Sophomore, Both, 0.5, &[],
            ),
        ],
        Junior => vec![
            rec(
                "English 11/American Literature",
                "Study of American literature and advanced composition techniques",
                Required, Junior, Fall, 1.0, &["English 10"],
            ),
            rec(
                "Algebra II or Pre-Calculus",
                "Advanced algebra concepts or preparation for calculus",
                Required, Junior, Both, 1.0, &["Geometry"],
            ),
            rec(
                "Physics",
                "Study of matter, energy, and the fundamental forces of nature",
                Required, Junior, Both, 1.0, &["Chemistry"],
            ),
            rec(
                "Government/Civics",
                "Examination of government structures, civic responsibilities, and political systems",
                Required, Junior, Fall, 0.5, &[],
            ),
            rec(
                "Economics",
                "Introduction to economic principles and financial literacy",
                Required, Junior, Spring, 0.5, &[],
            ),
            rec(
                "Foreign Language III",
                "Advanced language study focusing on literature and cultural contexts",
                Advanced, Junior, Both, 1.0, &["Foreign Language II"],
            ),
            rec(
                "Career Pathway Elective",
                "Specialized course aligned with student's career interests",
                Elective, Junior, Both, 1.0, &[],
            ),
        ],
        Senior => vec![
            rec(
                "English 12/British Literature",
                "Study of British literature and college-level writing skills",
                Required, Senior, Fall, 1.0, &["English 11"],
            ),
            rec(
                "Pre-Calculus or Calculus",
                "Advanced mathematics preparation for college-level work",
                Advanced, Senior, Both, 1.0, &["Algebra II"],
            ),
            rec(
                "Advanced Science Elective",
                "Specialized science course in an area of interest",
                Advanced, Senior, Both, 1.0, &["Physics"],
            ),
            rec(
                "Social Studies Elective",
                "Specialized social studies course based on student interests",
                Elective, Senior, Both, 1.0, &[],
            ),
            rec(
                "College Preparation Seminar",
                "Guidance on college applications, essays, and transition planning",
                Required, Senior, Fall, 0.5, &[],
            ),
            rec(
                "Senior Capstone Project",
                "Independent research or project demonstrating culmination of high school learning",
                Required, Senior, Spring, 0.5, &[],
            ),
        ],
    }
}
