//! Property-based tests for scoring and the audit log.
//!
//! Invariants tested:
//! - Any subset of a quiz's options scores within [0, 100]
//! - Only the exact correct set scores a perfect band
//! - Resubmitting a quiz keeps a single score entry
//! - The audit log never exceeds its capacity and stays newest first
//!
//! Increase the number of generated cases with `PROPTEST_CASES=512`.

use std::collections::BTreeSet;
use std::sync::Arc;

use proptest::prelude::*;
use trainer_core::scoring::{Quiz, QuizOption, SelectionMode, grade};
use trainer_core::{AUDIT_LOG_CAPACITY, AuditLog, Band, QuizBank, ScoringEngine, SubmitOutcome};

// ── Strategies ────────────────────────────────────────────────────────────────

/// A multiple-choice quiz with 1..8 options, at least one of them correct
fn arb_quiz() -> impl Strategy<Value = Quiz> {
    prop::collection::vec(any::<bool>(), 1..8).prop_map(|mut flags| {
        if !flags.iter().any(|&f| f) {
            flags[0] = true;
        }
        Quiz {
            id: "generated".into(),
            prompt: "Generated question".into(),
            mode: SelectionMode::Multiple,
            options: flags
                .into_iter()
                .enumerate()
                .map(|(i, correct)| {
                    QuizOption::new(format!("o{i}"), format!("Option {i}"), correct)
                })
                .collect(),
        }
    })
}

/// A quiz together with a random subset of its option ids
fn arb_quiz_and_selection() -> impl Strategy<Value = (Quiz, Vec<String>)> {
    arb_quiz()
        .prop_flat_map(|quiz| {
            let n = quiz.options.len();
            (Just(quiz), prop::collection::vec(any::<bool>(), n))
        })
        .prop_map(|(quiz, picks)| {
            let selected = quiz
                .options
                .iter()
                .zip(picks)
                .filter(|(_, pick)| *pick)
                .map(|(o, _)| o.id.clone())
                .collect();
            (quiz, selected)
        })
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    /// Score stays in range for every subset of options.
    #[test]
    fn prop_score_within_bounds((quiz, selected) in arb_quiz_and_selection()) {
        prop_assume!(!selected.is_empty());
        let selected_set: BTreeSet<String> = selected.iter().cloned().collect();
        let result = grade(&quiz, &selected_set);

        prop_assert!(result.score >= 0.0);
        prop_assert!(result.score <= 100.0);
        prop_assert_eq!(result.correct_count + result.incorrect_count, selected.len());
    }

    /// Perfect band is reached by the exact correct set and nothing else.
    #[test]
    fn prop_perfect_only_for_exact_answer((quiz, selected) in arb_quiz_and_selection()) {
        prop_assume!(!selected.is_empty());
        let selected_set: BTreeSet<String> = selected.iter().cloned().collect();
        let result = grade(&quiz, &selected_set);

        let exact = quiz.correct_ids().len() == selected.len()
            && selected.iter().all(|id| quiz.correct_ids().contains(id.as_str()));
        prop_assert_eq!(result.band == Band::Perfect, exact);
    }

    /// The record holds one score per quiz: the latest one.
    #[test]
    fn prop_resubmission_overwrites(
        (quiz, first) in arb_quiz_and_selection(),
        picks in prop::collection::vec(any::<bool>(), 8),
    ) {
        let second: Vec<String> = quiz
            .options
            .iter()
            .zip(picks)
            .filter(|(_, pick)| *pick)
            .map(|(o, _)| o.id.clone())
            .collect();
        prop_assume!(!second.is_empty());

        let audit = Arc::new(AuditLog::new());
        let bank = QuizBank::new(vec![quiz]).unwrap();
        let engine = ScoringEngine::new(Arc::new(bank), audit);

        engine.submit("generated", first).unwrap();
        let outcome = engine.submit("generated", second).unwrap();
        let latest = match outcome {
            SubmitOutcome::Scored(result) => result.score,
            SubmitOutcome::NoSelection => unreachable!(),
        };

        prop_assert_eq!(engine.scores().len(), 1);
        prop_assert_eq!(engine.finalize().unwrap().average, latest);
    }

    /// Capacity holds for any number of inserts and order is newest first.
    #[test]
    fn prop_audit_log_bounded(count in 0usize..200) {
        let log = AuditLog::new();
        for i in 0..count {
            log.record("user", "TICK", i.to_string());
        }

        prop_assert_eq!(log.len(), count.min(AUDIT_LOG_CAPACITY));
        let descriptions: Vec<usize> = log
            .recent(AUDIT_LOG_CAPACITY)
            .into_iter()
            .map(|e| e.description.parse().unwrap())
            .collect();
        let oldest_kept = count.saturating_sub(AUDIT_LOG_CAPACITY);
        let expected: Vec<usize> = (oldest_kept..count).rev().collect();
        prop_assert_eq!(descriptions, expected);
    }
}
