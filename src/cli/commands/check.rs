use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

use super::helper::finish;
use super::{CommandResult, CommandSummary};
use crate::{
    cli::args::CheckCommand,
    config::load_config,
    core::{Error, analyze_unused},
    issues::{Issue, ParseErrorIssue, ScopeConfigIssue, UnusedKeyIssue},
};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let root = cmd
        .common
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let verbose = cmd.common.verbose;

    let config_result = load_config(&root)?;
    if verbose && !config_result.from_file {
        eprintln!("Note: No .arbrc.json found, using default configuration");
    }

    let report = analyze_unused(&root, &config_result.config, verbose);

    if report.source_paths_skipped > 0 {
        eprintln!(
            "{} {} path(s) skipped due to access errors{}",
            "warning:".bold().yellow(),
            report.source_paths_skipped,
            if verbose { "" } else { " (use -v for details)" }
        );
    }

    let mut issues: Vec<Issue> = report
        .findings
        .into_iter()
        .map(|finding| {
            Issue::UnusedKey(UnusedKeyIssue {
                context: finding.context,
            })
        })
        .collect();

    issues.extend(report.scan_warnings.into_iter().map(|warning| {
        Issue::ParseError(ParseErrorIssue {
            file_path: warning.file_path,
            error: warning.error,
        })
    }));

    issues.extend(report.scope_warnings.into_iter().map(|error| {
        let (file_path, message) = match &error {
            Error::ScopeConfigMalformed { path, message } => {
                (path.display().to_string(), message.clone())
            }
            other => (String::new(), other.to_string()),
        };
        Issue::ScopeConfig(ScopeConfigIssue {
            file_path,
            error: message,
        })
    }));

    Ok(finish(
        CommandSummary::Check,
        issues,
        report.source_files_checked,
        report.resource_files_checked,
        true,
    ))
}
