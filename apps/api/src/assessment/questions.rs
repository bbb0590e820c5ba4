//! Static question banks, one per assessment type. Question ids double as
//! prompt context ("Question about <id with dashes spaced>"), so keep them
//! descriptive kebab-case phrases.

use serde_json::json;

use crate::assessment::models::{
    AssessmentOption, AssessmentQuestion, AssessmentType, QuestionKind,
};

fn scale(id: &str, text: &str) -> AssessmentQuestion {
    AssessmentQuestion {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::Scale,
        options: vec![],
    }
}

fn open_ended(id: &str, text: &str) -> AssessmentQuestion {
    AssessmentQuestion {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::OpenEnded,
        options: vec![],
    }
}

fn multiple_choice(id: &str, text: &str, options: &[(&str, &str)]) -> AssessmentQuestion {
    AssessmentQuestion {
        id: id.to_string(),
        text: text.to_string(),
        kind: QuestionKind::MultipleChoice,
        options: options
            .iter()
            .map(|(option_id, option_text)| AssessmentOption {
                id: option_id.to_string(),
                text: option_text.to_string(),
                value: json!(option_id),
            })
            .collect(),
    }
}

/// Returns the question bank for one assessment type.
pub fn question_bank(assessment_type: AssessmentType) -> Vec<AssessmentQuestion> {
    match assessment_type {
        AssessmentType::Personality => vec![
            scale(
                "group-work-energy",
                "Working with a group of classmates on a project energizes me.",
            ),
            scale(
                "planning-ahead",
                "I plan my schoolwork well in advance rather than working close to deadlines.",
            ),
            scale(
                "comfort-with-uncertainty",
                "I am comfortable starting tasks even when the instructions are ambiguous.",
            ),
            multiple_choice(
                "preferred-role-in-team",
                "In a team project, which role do you naturally take?",
                &[
                    ("organizer", "The organizer who keeps everyone on schedule"),
                    ("idea-person", "The idea person who proposes new directions"),
                    ("finisher", "The finisher who polishes the final product"),
                    ("mediator", "The mediator who keeps the group working well together"),
                ],
            ),
            open_ended(
                "proudest-accomplishment",
                "Describe an accomplishment from the past year that you are proud of, and why.",
            ),
        ],
        AssessmentType::Skills => vec![
            scale(
                "writing-confidence",
                "I can clearly explain a complicated topic in writing.",
            ),
            scale(
                "math-problem-solving",
                "I can work through multi-step math problems without giving up.",
            ),
            scale(
                "public-speaking-comfort",
                "I am comfortable presenting in front of my class.",
            ),
            multiple_choice(
                "strongest-skill-area",
                "Which of these do people most often ask for your help with?",
                &[
                    ("writing-editing", "Writing or editing"),
                    ("math-science-homework", "Math or science homework"),
                    ("technology-troubleshooting", "Fixing technology problems"),
                    ("creative-projects", "Creative or artistic projects"),
                ],
            ),
            open_ended(
                "skill-to-develop",
                "What is one skill you wish you were better at, and what have you tried so far?",
            ),
        ],
        AssessmentType::Interests => vec![
            multiple_choice(
                "free-time-activity",
                "With a free Saturday and no obligations, you would most likely:",
                &[
                    ("build-or-code", "Build, code, or tinker with something"),
                    ("read-or-write", "Read or write for fun"),
                    ("volunteer-or-help", "Volunteer or help someone"),
                    ("create-art-or-music", "Make art, music, or videos"),
                    ("play-or-train-sports", "Play sports or train"),
                ],
            ),
            multiple_choice(
                "favorite-class-type",
                "Which class do you most look forward to?",
                &[
                    ("math-science", "Math or science"),
                    ("english-history", "English or history"),
                    ("arts-music", "Arts or music"),
                    ("technology-engineering", "Technology or engineering"),
                ],
            ),
            scale(
                "current-events-curiosity",
                "I follow news or videos about discoveries and ideas outside of school.",
            ),
            scale(
                "hands-on-learning",
                "I learn best when I can build or experiment rather than just read.",
            ),
            open_ended(
                "dream-career",
                "If you could have any career in ten years, what would it be and what appeals to you about it?",
            ),
        ],
        AssessmentType::Aptitude => vec![
            multiple_choice(
                "pattern-completion",
                "2, 6, 18, 54, ... which number comes next?",
                &[
                    ("108", "108"),
                    ("162", "162"),
                    ("216", "216"),
                    ("104", "104"),
                ],
            ),
            multiple_choice(
                "word-relationship",
                "Author is to novel as composer is to:",
                &[
                    ("orchestra", "Orchestra"),
                    ("symphony", "Symphony"),
                    ("conductor", "Conductor"),
                    ("piano", "Piano"),
                ],
            ),
            scale(
                "spatial-reasoning-comfort",
                "I can easily picture how an object looks rotated or folded.",
            ),
            scale(
                "estimation-accuracy",
                "My quick estimates of quantities or costs usually come out close.",
            ),
            open_ended(
                "problem-approach",
                "Walk through how you would figure out how many pizzas to order for a 60-person event.",
            ),
        ],
    }
}
