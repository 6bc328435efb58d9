//! Submission and assessment result types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Minimum average for a passing assessment
pub const PASS_THRESHOLD: f64 = 80.0;
/// Minimum average below which more study is recommended
pub const REVIEW_THRESHOLD: f64 = 60.0;
/// Minimum single-quiz score reported as partially correct
pub const PARTIAL_THRESHOLD: f64 = 50.0;

/// Render `value` as a percentage with `decimals` places, ties rounding up.
///
/// `{:.N}` alone rounds exact ties to even (`12.5` would print as `12`).
pub fn format_percent(value: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    format!("{:.*}%", decimals, rounded)
}

/// Advisory classification of one quiz score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Perfect,
    Partial,
    Fail,
}

impl Band {
    pub fn classify(score: f64, nothing_missed: bool) -> Self {
        if score == 100.0 && nothing_missed {
            Self::Perfect
        } else if score >= PARTIAL_THRESHOLD {
            Self::Partial
        } else {
            Self::Fail
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Perfect => "perfect",
            Self::Partial => "partial",
            Self::Fail => "fail",
        }
    }
}

/// Breakdown of one scored submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub quiz_id: String,
    /// In `[0, 100]`
    pub score: f64,
    pub correct_count: usize,
    pub incorrect_count: usize,
    /// Correct option ids the learner did not select, in authored order
    pub missed: Vec<String>,
    pub band: Band,
    /// Texts of every correct option, in authored order
    pub correct_options: Vec<String>,
}

impl SubmissionResult {
    /// Correct answers to show the learner; `None` on a full score
    pub fn reveal_answers(&self) -> Option<&[String]> {
        (self.score < 100.0).then_some(self.correct_options.as_slice())
    }
}

/// What `submit` produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    Scored(SubmissionResult),
    /// Nothing was selected; nothing was stored or recorded
    NoSelection,
}

impl SubmitOutcome {
    pub fn scored(&self) -> Option<&SubmissionResult> {
        match self {
            Self::Scored(result) => Some(result),
            Self::NoSelection => None,
        }
    }
}

/// Overall verdict across completed quizzes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    Passed,
    ReviewNeeded,
    MoreStudyNeeded,
}

impl AssessmentStatus {
    pub fn from_average(average: f64) -> Self {
        if average >= PASS_THRESHOLD {
            Self::Passed
        } else if average >= REVIEW_THRESHOLD {
            Self::ReviewNeeded
        } else {
            Self::MoreStudyNeeded
        }
    }

    pub fn certificate_eligible(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Passed => "Passed",
            Self::ReviewNeeded => "Review Needed",
            Self::MoreStudyNeeded => "More Study Needed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub completed_count: usize,
    pub average: f64,
    pub status: AssessmentStatus,
}

/// Latest score per quiz id. Resubmitting a quiz replaces its score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    scores: BTreeMap<String, f64>,
}

impl ScoreRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `score` for `quiz_id`, returning the score it replaced
    pub fn insert(&mut self, quiz_id: impl Into<String>, score: f64) -> Option<f64> {
        self.scores.insert(quiz_id.into(), score)
    }

    pub fn get(&self, quiz_id: &str) -> Option<f64> {
        self.scores.get(quiz_id).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Mean of the stored scores; `None` when nothing is stored
    pub fn average(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let total: f64 = self.scores.values().sum();
        Some(total / self.scores.len() as f64)
    }

    pub fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }
}
