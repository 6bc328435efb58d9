use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "trainer", about = "HIPAA compliance training simulator")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the user and project configs
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the role permission table
    Roles,
    /// Check whether a role may perform an action
    Decide(commands::policy::DecideArgs),
    /// List the available quizzes
    Quizzes,
    /// Score one quiz submission
    Quiz(commands::quiz::QuizArgs),
    /// Run an interactive training session
    Session,
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Roles => commands::policy::roles(config_path),
        Commands::Decide(args) => commands::policy::decide(args, config_path),
        Commands::Quizzes => commands::quiz::list(config_path),
        Commands::Quiz(args) => commands::quiz::run(args, config_path),
        Commands::Session => commands::session::run(config_path).await,
        Commands::Config(args) => commands::config::run(args, config_path),
    }
}
