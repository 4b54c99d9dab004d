use std::collections::BTreeSet;

use anyhow::Result;

use super::helper::finish;
use super::{CommandResult, CommandSummary, RemoveSummary};
use crate::{
    cli::args::RemoveCommand,
    core::{remove_localization, remove_localizations},
};

pub fn remove(cmd: RemoveCommand) -> Result<CommandResult> {
    let mut affected: BTreeSet<String> = BTreeSet::new();
    let mut failed: Vec<(String, String)> = Vec::new();
    let mut removed_count = 0;

    if cmd.lines {
        let outcome = remove_localizations(&cmd.folder, &cmd.keys)?;
        removed_count = outcome.removed;
        affected.extend(outcome.files.written.iter().map(|p| p.display().to_string()));
        failed.extend(
            outcome
                .files
                .failed
                .iter()
                .map(|(path, e)| (path.display().to_string(), e.to_string())),
        );
    } else {
        for key in &cmd.keys {
            let outcome = remove_localization(&cmd.folder, key)?;
            removed_count += outcome.written.len();
            affected.extend(outcome.written.iter().map(|p| p.display().to_string()));
            failed.extend(
                outcome
                    .failed
                    .iter()
                    .map(|(path, e)| (path.display().to_string(), e.to_string())),
            );
        }
    }

    let error_count = failed.len();
    let summary = RemoveSummary {
        keys: cmd.keys.clone(),
        affected_files: affected.into_iter().collect(),
        failed,
        removed_count,
        line_based: cmd.lines,
    };

    let mut result = finish(CommandSummary::Remove(summary), Vec::new(), 0, 0, false);
    result.error_count += error_count;
    Ok(result)
}
