//! Interactive training session over stdin.
//!
//! Reads one command per line. The session keeps a current role (the deck
//! starts as `doctor`) that `do` decisions are evaluated against.

use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use trainer_core::audit::codes;
use trainer_core::scoring::format_percent;
use trainer_core::{ScoringError, SubmitOutcome, TrainingSession};

use super::quiz::write_result;
use crate::config::ConfigLoader;

const INITIAL_ROLE: &str = "doctor";
const PRESENTER: &str = "presenter";
const DEFAULT_LOG_LINES: usize = 10;

const HELP: &str = "\
Commands:
  role <role>                 switch the current role
  do <action>                 attempt an action as the current role
  answer <quiz> <option>...   submit answers for a quiz
  final                       compute the final assessment
  scores                      show the latest score per quiz
  log [n]                     show the newest audit entries (default 10)
  help                        show this help
  quit                        end the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SessionCommand {
    Role(String),
    Do(String),
    Answer { quiz_id: String, options: Vec<String> },
    Final,
    Scores,
    Log(usize),
    Help,
    Quit,
}

/// Parse one line. Blank lines yield `None`.
pub(crate) fn parse_command(line: &str) -> Result<Option<SessionCommand>> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match (verb, args.as_slice()) {
        ("role", [role]) => SessionCommand::Role(role.to_string()),
        ("do", [action]) => SessionCommand::Do(action.to_string()),
        ("answer", [quiz_id, options @ ..]) => SessionCommand::Answer {
            quiz_id: quiz_id.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        },
        ("final", []) => SessionCommand::Final,
        ("scores", []) => SessionCommand::Scores,
        ("log", []) => SessionCommand::Log(DEFAULT_LOG_LINES),
        ("log", [n]) => match n.parse() {
            Ok(n) => SessionCommand::Log(n),
            Err(_) => bail!("log expects a number, got '{n}'"),
        },
        ("help", []) => SessionCommand::Help,
        ("quit" | "exit", []) => SessionCommand::Quit,
        ("role" | "do" | "answer" | "final" | "scores" | "log" | "help" | "quit" | "exit", _) => {
            bail!("wrong arguments for '{verb}' (try 'help')")
        }
        _ => bail!("unknown command '{verb}' (try 'help')"),
    };
    Ok(Some(command))
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Session state driven by [`SessionCommand`]s.
pub(crate) struct Presenter {
    session: TrainingSession,
    current_role: String,
}

impl Presenter {
    pub(crate) fn start(session: TrainingSession) -> Self {
        session
            .audit()
            .record(PRESENTER, codes::SESSION_START, "Presentation started");
        session
            .audit()
            .record(PRESENTER, codes::SLIDE_VIEW, "Viewing introduction");
        Self {
            session,
            current_role: INITIAL_ROLE.to_string(),
        }
    }

    pub(crate) fn current_role(&self) -> &str {
        &self.current_role
    }

    pub(crate) fn handle(&mut self, command: SessionCommand, out: &mut impl Write) -> Result<Flow> {
        debug!(?command, role = %self.current_role, "session command");
        match command {
            SessionCommand::Role(role) => {
                if !self.session.policy().table().contains_role(&role) {
                    writeln!(out, "Unknown role '{role}'")?;
                    return Ok(Flow::Continue);
                }
                self.session.policy().record_role_switch(&role);
                writeln!(out, "Current role: {role}")?;
                self.current_role = role;
            }
            SessionCommand::Do(action) => {
                let decision = self.session.policy().decide(&self.current_role, &action);
                if decision.allowed {
                    writeln!(out, "Access granted: {}", decision.action.display_name())?;
                } else {
                    writeln!(out, "Access denied: {}", decision.action.display_name())?;
                }
            }
            SessionCommand::Answer { quiz_id, options } => {
                match self.session.scoring().submit(&quiz_id, options) {
                    Ok(SubmitOutcome::Scored(result)) => write_result(out, &result)?,
                    Ok(SubmitOutcome::NoSelection) => {
                        writeln!(out, "Please select at least one answer")?
                    }
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            SessionCommand::Final => match self.session.scoring().finalize() {
                Ok(assessment) => {
                    writeln!(
                        out,
                        "Final score: {} over {} quiz(zes): {}",
                        format_percent(assessment.average, 1),
                        assessment.completed_count,
                        assessment.status.label()
                    )?;
                    if assessment.status.certificate_eligible() {
                        writeln!(out, "Certificate of completion earned")?;
                    }
                }
                Err(ScoringError::NoQuizzesCompleted) => {
                    writeln!(out, "Please complete at least one quiz first")?
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            SessionCommand::Scores => {
                let scores = self.session.scoring().scores();
                if scores.is_empty() {
                    writeln!(out, "No quizzes completed yet")?;
                }
                for (quiz_id, score) in scores {
                    writeln!(out, "{quiz_id}: {}", format_percent(score, 0))?;
                }
            }
            SessionCommand::Log(n) => {
                for entry in self.session.audit().recent(n) {
                    writeln!(out, "{entry}")?;
                }
            }
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

/// Run the session until `quit` or end of input.
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    let mut presenter = Presenter::start(TrainingSession::new(&config)?);

    println!("HIPAA training session. Type 'help' for commands.");
    println!("Current role: {}", presenter.current_role());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        {
            let mut stdout = std::io::stdout().lock();
            write!(stdout, "> ")?;
            stdout.flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        let mut stdout = std::io::stdout().lock();
        if presenter.handle(command, &mut stdout)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
