use anyhow::Result;

use super::helper::finish;
use super::{CommandResult, CommandSummary, SortSummary};
use crate::{
    cli::args::SortCommand,
    core::{check_languages, sort_group},
};

pub fn sort(cmd: SortCommand) -> Result<CommandResult> {
    let group = check_languages(&cmd.folder)?;
    let outcome = sort_group(&group);

    let failed: Vec<(String, String)> = outcome
        .failed
        .iter()
        .map(|(path, e)| (path.display().to_string(), e.to_string()))
        .collect();
    let error_count = failed.len();

    let summary = SortSummary {
        written: outcome
            .written
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        failed,
    };

    let mut result = finish(
        CommandSummary::Sort(summary),
        Vec::new(),
        0,
        group.documents.len(),
        false,
    );
    result.error_count += error_count;
    Ok(result)
}
