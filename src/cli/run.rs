/// Main entry point for the arb CLI.
///
/// Dispatches to the appropriate command handler based on the parsed
/// arguments.
use std::{fs, path::Path};

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, CommandSummary, InitSummary},
    commands::{add::add, check::check, remove::remove, search::search, sort::sort},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Add(cmd)) => add(cmd),
        Some(Command::Remove(cmd)) => remove(cmd),
        Some(Command::Sort(cmd)) => sort(cmd),
        Some(Command::Search(cmd)) => search(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
                error_count: 0,
                finding_count: 0,
                exit_on_findings: false,
                issues: Vec::new(),
                parse_error_count: 0,
                source_files_checked: 0,
                resource_files_checked: 0,
            })
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
