use std::path::PathBuf;

use anyhow::Result;

use super::helper::finish;
use super::{CommandResult, CommandSummary, SearchSummary};
use crate::{
    cli::args::SearchCommand,
    config::load_config,
    core::search_localizations,
    issues::{Issue, ParseErrorIssue},
};

pub fn search(cmd: SearchCommand) -> Result<CommandResult> {
    let root = cmd
        .common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));

    let config_result = load_config(&root)?;
    let report = search_localizations(&root, &config_result.config, &cmd.query, cmd.common.verbose);

    let issues: Vec<Issue> = report
        .warnings
        .into_iter()
        .map(|warning| {
            Issue::ParseError(ParseErrorIssue {
                file_path: warning.file_path,
                error: warning.error,
            })
        })
        .collect();

    let summary = SearchSummary {
        query: cmd.query.clone(),
        matches: report.matches,
        occurrences: report.occurrences,
    };

    Ok(finish(CommandSummary::Search(summary), issues, 0, 0, false))
}
