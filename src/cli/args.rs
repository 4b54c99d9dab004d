//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all arb
//! commands, using clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Report unused localization keys across the workspace
//! - `add`: Insert a localization into every language file in lockstep
//! - `remove`: Remove localization keys from every language file
//! - `sort`: Deterministically re-sort sections and keys
//! - `search`: Find localization keys and their source usages
//! - `init`: Initialize arb configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Add(cmd)) => cmd.common.verbose,
            Some(Command::Remove(cmd)) => cmd.common.verbose,
            Some(Command::Sort(cmd)) => cmd.common.verbose,
            Some(Command::Search(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Workspace root directory (source and resources are scanned from here)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Localization folder holding the .arb language files
    #[arg(long)]
    pub folder: PathBuf,

    /// Target section name (must exist unless --new-section is given)
    #[arg(long)]
    pub section: String,

    /// Name of the new localization key
    #[arg(long)]
    pub key: String,

    /// Translation per language, as <language>=<text>; repeat per language
    #[arg(long = "value", value_name = "LANG=TEXT")]
    pub values: Vec<String>,

    /// Create the section instead of requiring it to exist
    #[arg(long)]
    pub new_section: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Localization folder holding the .arb language files
    #[arg(long)]
    pub folder: PathBuf,

    /// Keys to remove
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Delete raw lines (first matching line per key per file) instead of
    /// re-serializing the documents
    #[arg(long)]
    pub lines: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SortCommand {
    /// Localization folder holding the .arb language files
    #[arg(long)]
    pub folder: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Key or translated text to search for (case-insensitive)
    pub query: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check for unused localization keys across the workspace
    Check(CheckCommand),
    /// Add a localization to every language file in a folder
    Add(AddCommand),
    /// Remove localization keys from every language file in a folder
    Remove(RemoveCommand),
    /// Re-sort sections and keys in every language file in a folder
    Sort(SortCommand),
    /// Find localization keys and where they are used
    Search(SearchCommand),
    /// Initialize a new .arbrc.json configuration file
    Init,
}
