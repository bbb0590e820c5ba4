//! GPA engine — deterministic, side-effect-free conversion from course
//! records to semester and cumulative GPA figures.
//!
//! The cumulative GPA is credit-weighted across every eligible completed
//! course in the history, NOT an average of per-semester GPAs. Courses
//! that are uncompleted, ungraded, or graded P/I/W are excluded from both
//! numerator and denominator. Nothing here errors: malformed data
//! degrades to "excluded from average".

use crate::tracker::models::{Course, Semester};

/// Per-semester GPAs plus the two tracker-level cached scalars.
#[derive(Debug, Clone)]
pub struct GpaRollup {
    pub semesters: Vec<Semester>,
    pub cumulative_gpa: f64,
    pub total_credits: f64,
}

fn is_eligible(course: &Course) -> bool {
    course.completed && course.grade.is_some_and(|g| g.points().is_some())
}

/// Grade points contributed by one course: base points plus the
/// honors/AP bonus. 0.0 when the grade carries no GPA weight.
pub fn course_grade_points(course: &Course) -> f64 {
    match course.grade.and_then(|g| g.points()) {
        Some(base) => base + course.course_type.bonus(),
        None => 0.0,
    }
}

/// Credit-weighted GPA over the eligible completed courses in `courses`,
/// rounded to 2 decimals. 0.0 when no course is eligible.
pub fn weighted_gpa(courses: &[Course]) -> f64 {
    let mut points = 0.0;
    let mut credits = 0.0;

    for course in courses.iter().filter(|c| is_eligible(c)) {
        points += course_grade_points(course) * course.credits;
        credits += course.credits;
    }

    if credits > 0.0 {
        round2(points / credits)
    } else {
        0.0
    }
}

/// Fills in each semester's GPA and returns the cumulative GPA and total
/// credits computed over the union of eligible courses from all semesters.
pub fn compute_all_gpas(mut semesters: Vec<Semester>) -> GpaRollup {
    let mut all_eligible: Vec<Course> = Vec::new();
    let mut total_credits = 0.0;

    for semester in &mut semesters {
        semester.gpa = weighted_gpa(&semester.courses);

        for course in semester.courses.iter().filter(|c| is_eligible(c)) {
            total_credits += course.credits;
            all_eligible.push(course.clone());
        }
    }

    let cumulative_gpa = weighted_gpa(&all_eligible);

    GpaRollup {
        semesters,
        cumulative_gpa,
        total_credits,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::models::{CourseType, LetterGrade, Term};

    fn course(
        grade: Option<LetterGrade>,
        course_type: CourseType,
        credits: f64,
        completed: bool,
    ) -> Course {
        Course {
            name: "Test Course".to_string(),
            course_type,
            credits,
            semester: Term::Fall,
            year: 2025,
            grade,
            completed,
        }
    }

    fn semester(courses: Vec<Course>) -> Semester {
        Semester {
            term: Term::Fall,
            year: 2025,
            courses,
            gpa: 0.0,
        }
    }

    #[test]
    fn test_no_eligible_courses_yields_zero() {
        let rollup = compute_all_gpas(vec![semester(vec![
            course(None, CourseType::Regular, 1.0, false),
            course(Some(LetterGrade::A), CourseType::Regular, 1.0, false),
            course(Some(LetterGrade::Withdrawal), CourseType::Regular, 1.0, true),
        ])]);
        assert_eq!(rollup.semesters[0].gpa, 0.0);
        assert_eq!(rollup.cumulative_gpa, 0.0);
        assert_eq!(rollup.total_credits, 0.0);
    }

    #[test]
    fn test_empty_semester_list() {
        let rollup = compute_all_gpas(vec![]);
        assert_eq!(rollup.cumulative_gpa, 0.0);
        assert_eq!(rollup.total_credits, 0.0);
        assert!(rollup.semesters.is_empty());
    }

    #[test]
    fn test_single_regular_a_is_4_00() {
        let rollup = compute_all_gpas(vec![semester(vec![course(
            Some(LetterGrade::A),
            CourseType::Regular,
            1.0,
            true,
        )])]);
        assert_eq!(rollup.semesters[0].gpa, 4.0);
        assert_eq!(rollup.cumulative_gpa, 4.0);
        assert_eq!(rollup.total_credits, 1.0);
    }

    #[test]
    fn test_ap_a_is_5_00_uncapped() {
        // AP bonus pushes the contribution past the 4.0 scale by design.
        let rollup = compute_all_gpas(vec![semester(vec![course(
            Some(LetterGrade::A),
            CourseType::Ap,
            1.0,
            true,
        )])]);
        assert_eq!(rollup.cumulative_gpa, 5.0);
    }

    #[test]
    fn test_honors_bonus_is_half_point() {
        let c = course(Some(LetterGrade::B), CourseType::Honors, 1.0, true);
        assert_eq!(course_grade_points(&c), 3.5);
    }

    #[test]
    fn test_withdrawal_and_pass_do_not_move_gpa() {
        let base = vec![
            course(Some(LetterGrade::A), CourseType::Regular, 3.0, true),
            course(Some(LetterGrade::BPlus), CourseType::Honors, 1.0, true),
        ];
        let with_excluded = {
            let mut courses = base.clone();
            courses.push(course(Some(LetterGrade::Withdrawal), CourseType::Regular, 1.0, true));
            courses.push(course(Some(LetterGrade::Pass), CourseType::Ap, 2.0, true));
            courses
        };

        let a = compute_all_gpas(vec![semester(base)]);
        let b = compute_all_gpas(vec![semester(with_excluded)]);

        assert_eq!(a.cumulative_gpa, b.cumulative_gpa);
        assert_eq!(a.total_credits, b.total_credits);
    }

    #[test]
    fn test_incomplete_is_excluded() {
        let rollup = compute_all_gpas(vec![semester(vec![
            course(Some(LetterGrade::A), CourseType::Regular, 1.0, true),
            course(Some(LetterGrade::Incomplete), CourseType::Regular, 4.0, true),
        ])]);
        assert_eq!(rollup.cumulative_gpa, 4.0);
        assert_eq!(rollup.total_credits, 1.0);
    }

    #[test]
    fn test_uncompleted_course_is_excluded() {
        let rollup = compute_all_gpas(vec![semester(vec![
            course(Some(LetterGrade::A), CourseType::Regular, 1.0, true),
            course(Some(LetterGrade::F), CourseType::Regular, 4.0, false),
        ])]);
        assert_eq!(rollup.cumulative_gpa, 4.0);
        assert_eq!(rollup.total_credits, 1.0);
    }

    #[test]
    fn test_cumulative_is_credit_weighted_not_mean_of_semesters() {
        // Semester A: one 4-credit A (GPA 4.0). Semester B: one 1-credit F
        // (GPA 0.0). Cumulative = (16 + 0) / 5 = 3.20, not 2.00.
        let a = semester(vec![course(Some(LetterGrade::A), CourseType::Regular, 4.0, true)]);
        let b = Semester {
            term: Term::Spring,
            year: 2026,
            courses: vec![course(Some(LetterGrade::F), CourseType::Regular, 1.0, true)],
            gpa: 0.0,
        };

        let rollup = compute_all_gpas(vec![a, b]);
        assert_eq!(rollup.semesters[0].gpa, 4.0);
        assert_eq!(rollup.semesters[1].gpa, 0.0);
        assert_eq!(rollup.cumulative_gpa, 3.2);
        assert_eq!(rollup.total_credits, 5.0);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        // A (4.0 * 1) + B (3.0 * 2) = 10.0 over 3 credits = 3.333... -> 3.33
        let rollup = compute_all_gpas(vec![semester(vec![
            course(Some(LetterGrade::A), CourseType::Regular, 1.0, true),
            course(Some(LetterGrade::B), CourseType::Regular, 2.0, true),
        ])]);
        assert_eq!(rollup.cumulative_gpa, 3.33);
    }

    #[test]
    fn test_fractional_credits() {
        // PE at 0.5 credits: (4.0*1 + 2.0*0.5) / 1.5 = 3.333... -> 3.33
        let rollup = compute_all_gpas(vec![semester(vec![
            course(Some(LetterGrade::A), CourseType::Regular, 1.0, true),
            course(Some(LetterGrade::C), CourseType::Regular, 0.5, true),
        ])]);
        assert_eq!(rollup.cumulative_gpa, 3.33);
        assert_eq!(rollup.total_credits, 1.5);
    }

    #[test]
    fn test_stale_semester_gpa_is_overwritten() {
        let mut s = semester(vec![course(Some(LetterGrade::B), CourseType::Regular, 1.0, true)]);
        s.gpa = 9.99;
        let rollup = compute_all_gpas(vec![s]);
        assert_eq!(rollup.semesters[0].gpa, 3.0);
    }
}
