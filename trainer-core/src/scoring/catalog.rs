//! Built-in quizzes of the HIPAA for Developers deck

use super::quiz::{Quiz, QuizOption, SelectionMode};

fn quiz(id: &str, prompt: &str, mode: SelectionMode, options: &[(&str, &str, bool)]) -> Quiz {
    Quiz {
        id: id.to_string(),
        prompt: prompt.to_string(),
        mode,
        options: options
            .iter()
            .map(|&(id, text, correct)| QuizOption::new(id, text, correct))
            .collect(),
    }
}

pub fn builtin_quizzes() -> Vec<Quiz> {
    vec![
        quiz(
            "phiIdentification",
            "Which of the following are considered PHI (Protected Health Information)?",
            SelectionMode::Multiple,
            &[
                ("name", "Patient's full name", true),
                ("color", "Favorite color", false),
                ("bp", "Blood pressure reading", true),
                ("movie", "Favorite movie", false),
                ("email", "Email address (when linked to health data)", true),
                ("city", "City of residence (population > 20,000)", false),
            ],
        ),
        quiz(
            "bestPractices",
            "What is the BEST practice for storing patient health records?",
            SelectionMode::Single,
            &[
                ("a", "Encrypt PHI at rest and in transit with AES-256", true),
                ("b", "Store PHI in plain text if inside a VPC", false),
                ("c", "Share PHI with any analytics vendor", false),
                ("d", "Encryption is optional if you have good access controls", false),
            ],
        ),
        quiz(
            "baaRequired",
            "Which scenarios require a Business Associate Agreement (BAA)?",
            SelectionMode::Multiple,
            &[
                ("aws", "Using AWS S3 to store patient X-rays", true),
                ("zoom", "Using Zoom for telehealth appointments", true),
                (
                    "internal",
                    "Internal employee accessing own company's patient database",
                    false,
                ),
                (
                    "analytics",
                    "Third-party analytics processing de-identified data",
                    false,
                ),
                ("billing", "Outsourced medical billing service", true),
            ],
        ),
        quiz(
            "accessControl",
            "A nurse wants to view all patient records in the hospital. What should the system do?",
            SelectionMode::Single,
            &[
                ("allow", "Allow access - nurses need patient information", false),
                (
                    "deny",
                    "Deny access - nurses should only see assigned patients (Minimum Necessary)",
                    true,
                ),
                ("log", "Allow but log the access for later review", false),
                ("ask", "Ask for supervisor approval each time", false),
            ],
        ),
        quiz(
            "incidentResponse",
            "You discover unauthorized access to 600 patient records. What must you do?",
            SelectionMode::Single,
            &[
                ("wait", "Wait to see if any harm occurs before notifying", false),
                (
                    "notify",
                    "Notify affected individuals within 60 days and report to HHS",
                    true,
                ),
                ("fix", "Fix the vulnerability and move on", false),
                ("internal", "Only inform internal management", false),
            ],
        ),
    ]
}
