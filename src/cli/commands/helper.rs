use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

pub fn finish(
    summary: CommandSummary,
    issues: Vec<Issue>,
    source_files_checked: usize,
    resource_files_checked: usize,
    exit_on_findings: bool,
) -> CommandResult {
    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    let finding_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::UnusedKey(_)))
        .count();

    CommandResult {
        summary,
        error_count,
        finding_count,
        exit_on_findings,
        issues,
        parse_error_count,
        source_files_checked,
        resource_files_checked,
    }
}
