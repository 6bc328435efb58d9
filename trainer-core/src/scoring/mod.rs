//! Quiz scoring with partial credit
//!
//! Provides quiz definitions, the built-in catalog, per-quiz grading and
//! the aggregate assessment.

mod catalog;
mod engine;
mod quiz;
mod types;

pub use catalog::builtin_quizzes;
pub use engine::{DEFAULT_LEARNER, ScoringEngine, grade};
pub use quiz::{Quiz, QuizBank, QuizOption, SelectionMode};
pub use types::{
    AssessmentResult, AssessmentStatus, Band, PARTIAL_THRESHOLD, PASS_THRESHOLD,
    REVIEW_THRESHOLD, ScoreRecord, SubmissionResult, SubmitOutcome, format_percent,
};
