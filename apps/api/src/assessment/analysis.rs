//! Comprehensive analysis — prompt-input formatting plus best-effort
//! extraction of structured sections from free-form advisor prose.
//!
//! The extraction is line-oriented scraping, not a parser with a grammar:
//! every section has hand-authored defaults, so unstructured or partial
//! prose still yields a complete report.

use serde_json::Value;

use crate::assessment::models::{AnalysisReport, CareerPath, StoredResponse};
use crate::models::assessment::AssessmentRow;

/// Formats stored assessment responses into the text block shared by the
/// plan-generation and comprehensive-analysis prompts.
pub fn format_assessment_data(assessments: &[AssessmentRow]) -> String {
    assessments
        .iter()
        .map(|row| {
            let responses: Vec<StoredResponse> =
                serde_json::from_value(row.responses.clone()).unwrap_or_default();
            let body = responses
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    format!(
                        "Question {}: Question about {}\nAnswer: {}",
                        i + 1,
                        r.question_id.replace('-', " "),
                        render_answer(&r.response)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n\n");
            format!("{} ASSESSMENT:\n{}", row.assessment_type.to_uppercase(), body)
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

fn render_answer(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds the full report from analysis prose, defaulting every section
/// the scrape comes up empty on.
pub fn build_report(text: &str) -> AnalysisReport {
    let sections = split_sections(text);
    AnalysisReport {
        career_paths: extract_career_paths(&sections.career_paths),
        strengths: list_or_default(&sections.strengths, default_strengths),
        improvement_areas: list_or_default(&sections.improvements, default_improvement_areas),
        recommended_steps: list_or_default(&sections.steps, default_recommended_steps),
    }
}

/// The report used when both providers fail outright.
pub fn fallback_report() -> AnalysisReport {
    AnalysisReport {
        career_paths: default_career_paths(),
        strengths: default_strengths(),
        improvement_areas: default_improvement_areas(),
        recommended_steps: default_recommended_steps(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Section scraping
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    CareerPaths,
    Strengths,
    Improvements,
    Steps,
}

#[derive(Debug, Default)]
struct SectionLines<'a> {
    career_paths: Vec<&'a str>,
    strengths: Vec<&'a str>,
    improvements: Vec<&'a str>,
    steps: Vec<&'a str>,
}

fn split_sections(text: &str) -> SectionLines<'_> {
    let mut sections = SectionLines::default();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        if let Some(section) = classify_heading(line) {
            current = Some(section);
            continue;
        }
        match current {
            Some(Section::CareerPaths) => sections.career_paths.push(line),
            Some(Section::Strengths) => sections.strengths.push(line),
            Some(Section::Improvements) => sections.improvements.push(line),
            Some(Section::Steps) => sections.steps.push(line),
            None => {}
        }
    }

    sections
}

fn classify_heading(line: &str) -> Option<Section> {
    if !looks_like_heading(line) {
        return None;
    }
    let lower = line.to_lowercase();
    if lower.contains("career path") {
        Some(Section::CareerPaths)
    } else if lower.contains("strength") {
        Some(Section::Strengths)
    } else if lower.contains("areas for development")
        || lower.contains("areas to develop")
        || lower.contains("improvement")
    {
        Some(Section::Improvements)
    } else if lower.contains("next steps") || lower.contains("recommended steps") {
        Some(Section::Steps)
    } else {
        None
    }
}

/// A heading is a short line marked as one: markdown `#`, a trailing
/// colon, or an all-caps run. Bullet content never qualifies, so a step
/// like "- Take courses in your areas of strength" cannot restart the
/// strengths section.
fn looks_like_heading(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.len() > 80 || bullet_text(trimmed).is_some() {
        return false;
    }
    trimmed.starts_with('#')
        || trimmed.ends_with(':')
        || trimmed
            .chars()
            .filter(|c| c.is_alphabetic())
            .take(12)
            .all(|c| c.is_uppercase())
}

/// Strips a leading `-`, `•`, `*`, or `N.` / `N)` marker.
fn bullet_text(line: &str) -> Option<String> {
    let trimmed = line.trim();

    let rest = if let Some(rest) = trimmed.strip_prefix(|c: char| c == '-' || c == '•' || c == '*')
    {
        rest
    } else {
        let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let after = &trimmed[digits..];
        match after.strip_prefix(|c: char| c == '.' || c == ')') {
            Some(rest) => rest,
            None => return None,
        }
    };

    let rest = rest.trim();
    (!rest.is_empty()).then(|| rest.to_string())
}

fn list_or_default(lines: &[&str], default: fn() -> Vec<String>) -> Vec<String> {
    let items: Vec<String> = lines.iter().filter_map(|l| bullet_text(l)).take(5).collect();
    if items.is_empty() {
        default()
    } else {
        items
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Career path entries
// ────────────────────────────────────────────────────────────────────────────

fn extract_career_paths(lines: &[&str]) -> Vec<CareerPath> {
    let mut entries: Vec<Vec<String>> = Vec::new();

    for line in lines {
        let Some(item) = bullet_text(line) else {
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                if let Some(entry) = entries.last_mut() {
                    entry.push(trimmed.to_string());
                }
            }
            continue;
        };

        let lower = item.to_lowercase();
        let is_subfield = lower.starts_with("description")
            || lower.starts_with("education")
            || lower.contains("major");
        let is_indented = line.starts_with(char::is_whitespace);

        match entries.last_mut() {
            Some(entry) if is_subfield || is_indented => entry.push(item),
            _ => entries.push(vec![item]),
        }
    }

    let careers: Vec<CareerPath> = entries.iter().take(5).map(|e| parse_career_entry(e)).collect();

    if careers.is_empty() {
        default_career_paths()
    } else {
        careers
    }
}

fn parse_career_entry(entry: &[String]) -> CareerPath {
    let first = entry.first().map(String::as_str).unwrap_or_default();
    let (title, inline_description) = match first.split_once(':') {
        Some((t, d)) => (t.trim().to_string(), d.trim().to_string()),
        None => (first.trim().to_string(), String::new()),
    };
    let title = if title.is_empty() {
        "Career option".to_string()
    } else {
        title
    };

    let mut description = inline_description;
    let mut education_requirements: Vec<String> = Vec::new();
    let mut major_recommendations: Vec<String> = Vec::new();

    for line in entry.iter().skip(1) {
        let lower = line.to_lowercase();
        let remainder = line
            .split_once(':')
            .map(|(_, rest)| rest.trim())
            .unwrap_or_default();

        if lower.starts_with("description") {
            if !remainder.is_empty() {
                description = remainder.to_string();
            }
        } else if lower.starts_with("education") {
            education_requirements.extend(split_items(remainder));
        } else if lower.contains("major") {
            major_recommendations.extend(split_items(remainder));
        } else if description.is_empty() {
            description = line.trim().to_string();
        }
    }

    if description.is_empty() {
        description = "Career aligned with your assessment results.".to_string();
    }
    if education_requirements.is_empty() {
        education_requirements = vec![
            "Bachelor's degree".to_string(),
            "Advanced certification".to_string(),
        ];
    }
    if major_recommendations.is_empty() {
        major_recommendations = default_majors_for(&title);
    }

    CareerPath {
        title,
        description,
        education_requirements: education_requirements.into_iter().take(3).collect(),
        major_recommendations: major_recommendations.into_iter().take(3).collect(),
    }
}

fn split_items(text: &str) -> Vec<String> {
    text.split([';', ','])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn default_majors_for(title: &str) -> Vec<String> {
    let lower = title.to_lowercase();
    if lower.contains("engineer") || lower.contains("developer") {
        vec![
            "Computer Science".to_string(),
            "Software Engineering".to_string(),
            "Information Technology".to_string(),
        ]
    } else if lower.contains("business") || lower.contains("management") {
        vec![
            "Business Administration".to_string(),
            "Management".to_string(),
            "Marketing".to_string(),
        ]
    } else if lower.contains("healthcare") || lower.contains("medical") {
        vec![
            "Nursing".to_string(),
            "Health Sciences".to_string(),
            "Biology".to_string(),
        ]
    } else {
        vec!["Relevant academic programs".to_string()]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Defaults
// ────────────────────────────────────────────────────────────────────────────

fn default_career_paths() -> Vec<CareerPath> {
    vec![
        CareerPath {
            title: "Technology Professional".to_string(),
            description: "Careers in software development, IT management, or data analysis."
                .to_string(),
            education_requirements: vec![
                "Bachelor's degree in Computer Science".to_string(),
                "Technology certifications".to_string(),
            ],
            major_recommendations: vec![
                "Computer Science".to_string(),
                "Information Technology".to_string(),
                "Data Science".to_string(),
            ],
        },
        CareerPath {
            title: "Business Analyst".to_string(),
            description: "Careers analyzing business needs and developing solutions.".to_string(),
            education_requirements: vec![
                "Bachelor's in Business or related field".to_string(),
                "MBA advantageous".to_string(),
            ],
            major_recommendations: vec![
                "Business Administration".to_string(),
                "Economics".to_string(),
                "Statistics".to_string(),
            ],
        },
    ]
}

fn default_strengths() -> Vec<String> {
    vec![
        "Strong analytical thinking".to_string(),
        "Good communication skills".to_string(),
        "Self-motivated learner".to_string(),
        "Detail-oriented approach".to_string(),
        "Adaptable to new challenges".to_string(),
    ]
}

fn default_improvement_areas() -> Vec<String> {
    vec![
        "Developing specialized technical skills".to_string(),
        "Building practical experience".to_string(),
        "Expanding professional network".to_string(),
        "Enhancing time management".to_string(),
        "Building leadership skills".to_string(),
    ]
}

fn default_recommended_steps() -> Vec<String> {
    vec![
        "Research programs at colleges aligned with your career interests".to_string(),
        "Seek hands-on experience in fields of interest".to_string(),
        "Connect with professionals for informational interviews".to_string(),
        "Take advanced courses in your areas of strength".to_string(),
        "Develop a portfolio of achievements aligned with your goals".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    const WELL_FORMED: &str = "\
RECOMMENDED CAREER PATHS:
1. Machine Learning Engineer: Builds and deploys predictive models.
   - Description: Designs production ML systems for real products.
   - Education requirements: Bachelor's in Computer Science; Master's preferred
   - Recommended majors: Computer Science, Statistics, Applied Mathematics
2. UX Researcher: Studies how people use software.
   - Education: Bachelor's in HCI or Psychology
   - Majors: Human-Computer Interaction, Cognitive Science

STRENGTHS:
- Pattern recognition across subjects
- Persistence on hard problems
- Clear written communication

AREAS FOR DEVELOPMENT:
- Public speaking
- Asking for help earlier

RECOMMENDED NEXT STEPS:
1. Join the school robotics team
2. Take AP Statistics next year
3. Shadow a data scientist for a day
";

    #[test]
    fn test_well_formed_prose_extracts_all_sections() {
        let report = build_report(WELL_FORMED);

        assert_eq!(report.career_paths.len(), 2);
        assert_eq!(report.career_paths[0].title, "Machine Learning Engineer");
        assert_eq!(
            report.career_paths[0].description,
            "Designs production ML systems for real products."
        );
        assert_eq!(
            report.career_paths[0].major_recommendations,
            vec!["Computer Science", "Statistics", "Applied Mathematics"]
        );
        assert_eq!(report.career_paths[1].title, "UX Researcher");

        assert_eq!(report.strengths.len(), 3);
        assert_eq!(report.strengths[0], "Pattern recognition across subjects");
        assert_eq!(report.improvement_areas, vec!["Public speaking", "Asking for help earlier"]);
        assert_eq!(report.recommended_steps.len(), 3);
        assert_eq!(report.recommended_steps[1], "Take AP Statistics next year");
    }

    #[test]
    fn test_inline_description_used_when_no_subfield() {
        let text = "\
CAREER PATHS:
- Park Ranger: Protects public lands and educates visitors.

STRENGTHS:
- Loves the outdoors
";
        let report = build_report(text);
        assert_eq!(report.career_paths[0].title, "Park Ranger");
        assert_eq!(
            report.career_paths[0].description,
            "Protects public lands and educates visitors."
        );
        // No education line in the prose, so the stock default applies.
        assert_eq!(report.career_paths[0].education_requirements[0], "Bachelor's degree");
    }

    #[test]
    fn test_garbage_text_yields_full_default_report() {
        let report = build_report("The weather is nice today and nothing here is structured.");
        assert_eq!(report.career_paths.len(), 2);
        assert_eq!(report.career_paths[0].title, "Technology Professional");
        assert_eq!(report.strengths.len(), 5);
        assert_eq!(report.improvement_areas.len(), 5);
        assert_eq!(report.recommended_steps.len(), 5);
    }

    #[test]
    fn test_step_bullet_mentioning_strength_does_not_restart_section() {
        let text = "\
STRENGTHS:
- Curiosity

RECOMMENDED NEXT STEPS:
- Take advanced courses in your areas of strength
- Visit two college campuses
";
        let report = build_report(text);
        assert_eq!(report.strengths, vec!["Curiosity"]);
        assert_eq!(report.recommended_steps.len(), 2);
    }

    #[test]
    fn test_default_majors_keyed_by_title() {
        assert_eq!(default_majors_for("Software Developer")[0], "Computer Science");
        assert_eq!(default_majors_for("Business Manager")[0], "Business Administration");
        assert_eq!(default_majors_for("Healthcare Administrator")[0], "Nursing");
        assert_eq!(default_majors_for("Archaeologist"), vec!["Relevant academic programs"]);
    }

    #[test]
    fn test_fallback_report_is_complete() {
        let report = fallback_report();
        assert!(!report.career_paths.is_empty());
        assert_eq!(report.strengths.len(), 5);
    }

    #[test]
    fn test_format_assessment_data_renders_questions_and_answers() {
        let row = AssessmentRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            assessment_type: "interests".to_string(),
            responses: json!([
                {"questionId": "favorite-class-type", "response": "math-science"},
                {"questionId": "hands-on-learning", "response": 5}
            ]),
            results: json!([]),
            recommendations: None,
            valid: true,
            completed_at: Utc::now(),
        };

        let formatted = format_assessment_data(&[row]);
        assert!(formatted.starts_with("INTERESTS ASSESSMENT:"));
        assert!(formatted.contains("Question about favorite class type"));
        assert!(formatted.contains("Answer: math-science"));
        assert!(formatted.contains("Answer: 5"));
    }

    #[test]
    fn test_bullet_text_variants() {
        assert_eq!(bullet_text("- item"), Some("item".to_string()));
        assert_eq!(bullet_text("• item"), Some("item".to_string()));
        assert_eq!(bullet_text("3. item"), Some("item".to_string()));
        assert_eq!(bullet_text("12) item"), Some("item".to_string()));
        assert_eq!(bullet_text("plain prose"), None);
        assert_eq!(bullet_text("- "), None);
    }
}
