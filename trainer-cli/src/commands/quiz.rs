//! Quiz listing and one-shot scoring.

use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use trainer_core::scoring::format_percent;
use trainer_core::{Band, QuizBank, SubmissionResult, SubmitOutcome, TrainingSession};

use crate::config::ConfigLoader;

/// Arguments for scoring one submission.
#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Quiz to answer (see `trainer quizzes`)
    pub quiz_id: String,

    /// Selected option ids
    pub options: Vec<String>,
}

/// List every quiz with its option ids.
pub fn list(config_path: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    let bank = config.quiz_bank()?;
    println!("{}", quiz_table(&bank));
    Ok(())
}

/// Score a single submission and print the breakdown.
pub fn run(args: QuizArgs, config_path: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    let session = TrainingSession::new(&config)?;

    let mut stdout = std::io::stdout().lock();
    match session.scoring().submit(&args.quiz_id, args.options)? {
        SubmitOutcome::Scored(result) => write_result(&mut stdout, &result)?,
        SubmitOutcome::NoSelection => bail!("Please select at least one answer"),
    }
    Ok(())
}

pub(crate) fn quiz_table(bank: &QuizBank) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Quiz").fg(Color::Cyan),
        Cell::new("Mode").fg(Color::Cyan),
        Cell::new("Question").fg(Color::Cyan),
        Cell::new("Options").fg(Color::Cyan),
    ]);

    for quiz in bank.iter() {
        let options = quiz
            .options
            .iter()
            .map(|o| format!("{}: {}", o.id, o.text))
            .collect::<Vec<_>>()
            .join("\n");
        table.add_row(vec![
            Cell::new(&quiz.id),
            Cell::new(quiz.mode.as_str()),
            Cell::new(&quiz.prompt),
            Cell::new(options),
        ]);
    }

    table
}

/// Write the learner-facing feedback for a scored submission.
pub(crate) fn write_result(out: &mut impl Write, result: &SubmissionResult) -> Result<()> {
    let headline = match result.band {
        Band::Perfect => "Perfect!",
        Band::Partial => "Partially correct",
        Band::Fail => "Needs review",
    };
    writeln!(
        out,
        "{}: {} ({})",
        result.quiz_id,
        format_percent(result.score, 0),
        headline
    )?;
    writeln!(
        out,
        "  correct: {}  incorrect: {}",
        result.correct_count, result.incorrect_count
    )?;
    if !result.missed.is_empty() {
        writeln!(out, "  missed: {}", result.missed.join(", "))?;
    }
    if let Some(answers) = result.reveal_answers() {
        writeln!(out, "  correct answers: {}", answers.join("; "))?;
    }
    Ok(())
}
