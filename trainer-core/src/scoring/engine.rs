//! Quiz grading, score keeping and final assessment

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use super::quiz::{Quiz, QuizBank, SelectionMode};
use super::types::{
    AssessmentResult, AssessmentStatus, Band, ScoreRecord, SubmissionResult, SubmitOutcome,
    format_percent,
};
use crate::audit::{AuditLog, codes};
use crate::error::ScoringError;

/// Actor recorded for quiz events when none is configured
pub const DEFAULT_LEARNER: &str = "user";

/// Grade a non-empty selection against `quiz`.
///
/// Every selected id that is not a correct option counts against the
/// learner, including ids the quiz does not define. The score is
/// `(correct - incorrect) / total_correct * 100`, floored at zero.
pub fn grade(quiz: &Quiz, selected: &BTreeSet<String>) -> SubmissionResult {
    let correct_ids = quiz.correct_ids();

    let correct_count = selected
        .iter()
        .filter(|id| correct_ids.contains(id.as_str()))
        .count();
    let incorrect_count = selected.len() - correct_count;
    let missed: Vec<String> = quiz
        .correct_options()
        .filter(|o| !selected.contains(&o.id))
        .map(|o| o.id.clone())
        .collect();

    let total_correct = correct_ids.len() as f64;
    let net = correct_count as f64 - incorrect_count as f64;
    let score = (net / total_correct * 100.0).max(0.0);

    SubmissionResult {
        quiz_id: quiz.id.clone(),
        score,
        correct_count,
        incorrect_count,
        band: Band::classify(score, missed.is_empty()),
        missed,
        correct_options: quiz.correct_options().map(|o| o.text.clone()).collect(),
    }
}

/// Scores quiz submissions and aggregates them into an assessment.
///
/// The score record is private to the engine; quiz events go to the
/// shared audit log.
#[derive(Debug)]
pub struct ScoringEngine {
    quizzes: Arc<QuizBank>,
    scores: Mutex<ScoreRecord>,
    audit: Arc<AuditLog>,
    actor: String,
}

impl ScoringEngine {
    pub fn new(quizzes: Arc<QuizBank>, audit: Arc<AuditLog>) -> Self {
        Self {
            quizzes,
            scores: Mutex::new(ScoreRecord::new()),
            audit,
            actor: DEFAULT_LEARNER.to_string(),
        }
    }

    /// Record quiz events under `actor` instead of [`DEFAULT_LEARNER`]
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = actor.into();
        self
    }

    /// Grade a submission for `quiz_id` and keep its score.
    ///
    /// An empty selection returns [`SubmitOutcome::NoSelection`] and leaves
    /// both the score record and the audit log untouched.
    pub fn submit<I, S>(&self, quiz_id: &str, selected: I) -> Result<SubmitOutcome, ScoringError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let quiz = self
            .quizzes
            .get(quiz_id)
            .ok_or_else(|| ScoringError::UnknownQuiz(quiz_id.to_string()))?;

        let selected: BTreeSet<String> = selected.into_iter().map(Into::into).collect();
        if selected.is_empty() {
            debug!(quiz_id, "submission without selection");
            return Ok(SubmitOutcome::NoSelection);
        }
        let unknown = selected.iter().filter(|id| quiz.option(id).is_none()).count();
        if unknown > 0 {
            debug!(quiz_id, unknown, "selection names options the quiz does not define");
        }
        if quiz.mode == SelectionMode::Single && selected.len() > 1 {
            debug!(quiz_id, count = selected.len(), "several answers for a single-choice quiz");
        }

        let result = grade(quiz, &selected);

        let mut scores = self.lock_scores();
        let previous = scores.insert(quiz_id, result.score);
        self.audit.record(
            self.actor.as_str(),
            codes::QUIZ_COMPLETED,
            format!("{}: {}", quiz_id, format_percent(result.score, 0)),
        );
        drop(scores);

        debug!(
            quiz_id,
            score = result.score,
            band = result.band.as_str(),
            previous = ?previous,
            "quiz scored"
        );
        Ok(SubmitOutcome::Scored(result))
    }

    /// Average every stored score into an overall verdict.
    ///
    /// Each call records an `ASSESSMENT_COMPLETE` entry; nothing else
    /// changes, so repeated calls return the same result.
    pub fn finalize(&self) -> Result<AssessmentResult, ScoringError> {
        let scores = self.lock_scores();
        let average = scores.average().ok_or(ScoringError::NoQuizzesCompleted)?;

        let result = AssessmentResult {
            completed_count: scores.len(),
            average,
            status: AssessmentStatus::from_average(average),
        };
        self.audit.record(
            self.actor.as_str(),
            codes::ASSESSMENT_COMPLETE,
            format!("Final score: {}", format_percent(average, 1)),
        );
        drop(scores);

        info!(
            completed = result.completed_count,
            average = result.average,
            status = result.status.label(),
            "assessment complete"
        );
        Ok(result)
    }

    /// Latest score for one quiz
    pub fn score_for(&self, quiz_id: &str) -> Option<f64> {
        self.lock_scores().get(quiz_id)
    }

    /// Snapshot of every stored score
    pub fn scores(&self) -> BTreeMap<String, f64> {
        self.lock_scores().as_map().clone()
    }

    pub fn quizzes(&self) -> &QuizBank {
        &self.quizzes
    }

    fn lock_scores(&self) -> MutexGuard<'_, ScoreRecord> {
        self.scores.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
