//! Quiz definitions and the quiz bank

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How many options the learner is expected to pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Radio buttons: one answer
    Single,
    /// Checkboxes: any subset
    Multiple,
}

impl SelectionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    #[serde(default, alias = "correct")]
    pub is_correct: bool,
}

impl QuizOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_correct,
        }
    }
}

/// A static single- or multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub id: String,
    pub prompt: String,
    pub mode: SelectionMode,
    pub options: Vec<QuizOption>,
}

impl Quiz {
    /// Check the authored data: options present with unique ids, at least
    /// one correct answer, and exactly one for single-choice quizzes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidQuiz {
            quiz_id: self.id.clone(),
            reason: reason.to_string(),
        };

        if self.id.trim().is_empty() {
            return Err(invalid("quiz id is empty"));
        }
        if self.options.is_empty() {
            return Err(invalid("quiz has no options"));
        }

        let mut seen = BTreeSet::new();
        for option in &self.options {
            if !seen.insert(option.id.as_str()) {
                return Err(ConfigError::InvalidQuiz {
                    quiz_id: self.id.clone(),
                    reason: format!("option id repeated: {}", option.id),
                });
            }
        }

        match (self.mode, self.correct_options().count()) {
            (_, 0) => Err(invalid("quiz has no correct option")),
            (SelectionMode::Single, n) if n > 1 => {
                Err(invalid("single-choice quiz has more than one correct option"))
            }
            _ => Ok(()),
        }
    }

    /// Option with the given id, if the quiz defines one
    pub fn option(&self, id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Correct options, in authored order
    pub fn correct_options(&self) -> impl Iterator<Item = &QuizOption> {
        self.options.iter().filter(|o| o.is_correct)
    }

    pub fn correct_ids(&self) -> BTreeSet<&str> {
        self.correct_options().map(|o| o.id.as_str()).collect()
    }
}

/// Validated, ordered collection of quizzes keyed by id
#[derive(Debug, Clone)]
pub struct QuizBank {
    quizzes: Vec<Quiz>,
    index: HashMap<String, usize>,
}

impl QuizBank {
    /// Build a bank, validating every quiz and rejecting duplicate ids
    pub fn new(quizzes: impl IntoIterator<Item = Quiz>) -> Result<Self, ConfigError> {
        let quizzes: Vec<Quiz> = quizzes.into_iter().collect();
        let mut index = HashMap::with_capacity(quizzes.len());

        for (position, quiz) in quizzes.iter().enumerate() {
            quiz.validate()?;
            if index.insert(quiz.id.clone(), position).is_some() {
                return Err(ConfigError::DuplicateQuiz(quiz.id.clone()));
            }
        }

        Ok(Self { quizzes, index })
    }

    pub fn get(&self, id: &str) -> Option<&Quiz> {
        self.index.get(id).map(|&i| &self.quizzes[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quiz> {
        self.quizzes.iter()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

impl Default for QuizBank {
    fn default() -> Self {
        let quizzes = super::catalog::builtin_quizzes();
        let index = quizzes
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
        Self { quizzes, index }
    }
}
