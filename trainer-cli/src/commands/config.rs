use std::path::Path;

use crate::config::ConfigLoader;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (merged)
    Show,
    /// Show configuration file paths
    Path,
}

pub fn run(args: ConfigArgs, explicit: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(explicit),
        ConfigCommands::Path => show_paths(explicit),
    }
}

fn show_config(explicit: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(explicit)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str);
    Ok(())
}

fn show_paths(explicit: Option<&Path>) -> Result<()> {
    if let Some(path) = explicit {
        println!("Explicit config: {:?}", path);
    }
    println!("User config:     {:?}", ConfigLoader::user_config_path());
    println!("Project config:  {:?}", ConfigLoader::project_config_path());
    Ok(())
}
