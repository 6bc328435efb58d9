//! Role permission commands.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use trainer_core::{PermissionTable, TrainingSession};

use crate::config::ConfigLoader;

/// Arguments for a single access decision.
#[derive(Args, Debug)]
pub struct DecideArgs {
    /// Role requesting access (e.g., nurse)
    pub role: String,

    /// Action being attempted (e.g., viewRecord)
    pub action: String,
}

/// Print the permission table.
pub fn roles(config_path: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    let table = config.permission_table()?;
    println!("{}", permission_matrix(&table));
    Ok(())
}

/// Decide one request and show the resulting audit line.
pub fn decide(args: DecideArgs, config_path: Option<&Path>) -> Result<()> {
    let config = ConfigLoader::load(config_path)?;
    let session = TrainingSession::new(&config)?;

    let decision = session.policy().decide(&args.role, &args.action);
    let verdict = if decision.allowed { "ALLOWED" } else { "DENIED" };
    println!(
        "{}: {} may {}{}",
        verdict,
        decision.role,
        if decision.allowed { "" } else { "not " },
        decision.action.display_name()
    );
    for entry in session.audit().recent(1) {
        println!("{entry}");
    }
    Ok(())
}

/// One row per role, one column per action.
pub(crate) fn permission_matrix(permissions: &PermissionTable) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Role").fg(Color::Cyan)];
    header.extend(
        permissions
            .actions()
            .iter()
            .map(|action| Cell::new(action.display_name()).fg(Color::Cyan)),
    );
    table.set_header(header);

    for role in permissions.roles() {
        let mut row = vec![Cell::new(role)];
        for action in permissions.actions() {
            let cell = if permissions.allows(role.as_str(), action.as_str()) {
                Cell::new("yes").fg(Color::Green)
            } else {
                Cell::new("-").fg(Color::DarkGrey)
            };
            row.push(cell);
        }
        table.add_row(row);
    }

    table
}
