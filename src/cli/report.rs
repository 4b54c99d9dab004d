//! Report formatting and printing utilities.
//!
//! This module displays issues in cargo-style format and prints the
//! per-command summaries. Separate from core logic so the engine can be
//! used as a library without any console output.

use std::collections::HashMap;
use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    AddSummary, CommandResult, CommandSummary, InitSummary, RemoveSummary, SearchSummary,
    SortSummary,
};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum number of usage occurrences to display per searched key.
const MAX_USAGES_DISPLAY: usize = 50;

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    // Calculate max line number width for alignment
    let max_line_width = calculate_max_line_width(&sorted);

    let mut file_cache: FileLineCache = HashMap::new();
    for issue in &sorted {
        print_issue(issue, writer, max_line_width, &mut file_cache);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(source_files: usize, resource_files: usize) {
    print_success_to(source_files, resource_files, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(source_files: usize, resource_files: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {}, {} resource {} - no unused keys found",
            source_files,
            if source_files == 1 { "file" } else { "files" },
            resource_files,
            if resource_files == 1 { "file" } else { "files" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

/// Lines of the files issues point into, read once per file for context
/// display. `None` caches a failed read.
type FileLineCache = HashMap<String, Option<Vec<String>>>;

fn source_line<'a>(cache: &'a mut FileLineCache, path: &str, line: usize) -> Option<&'a str> {
    let lines = cache.entry(path.to_string()).or_insert_with(|| {
        std::fs::read_to_string(path)
            .ok()
            .map(|text| text.lines().map(str::to_string).collect())
    });
    lines
        .as_ref()
        .and_then(|lines| lines.get(line.checked_sub(1)?))
        .map(String::as_str)
}

fn print_issue<W: Write>(
    issue: &Issue,
    writer: &mut W,
    max_line_width: usize,
    file_cache: &mut FileLineCache,
) {
    let loc = issue.location();
    let (file_path, line, col) = extract_location_info(&loc);

    // Print severity and message (cargo-style)
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line:col
    if line > 0 {
        let _ = writeln!(writer, "  {} {}:{}:{}", "-->".blue(), file_path, line, col);
    } else {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    // Print the resource line the issue points at, if readable
    if line > 0
        && let Some(source_line) = source_line(file_cache, file_path, line)
    {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // Caret pointing to the column (col is 1-based)
        let prefix = if col > 1 {
            source_line.chars().take(col - 1).collect::<String>()
        } else {
            String::new()
        };
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn extract_location_info<'a>(loc: &'a ReportLocation<'a>) -> (&'a str, usize, usize) {
    match loc {
        ReportLocation::Resource(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::File { path } => (path, 0, 0),
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Resource(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();
    let (a_path, a_line, a_col) = extract_location_info(&a_loc);
    let (b_path, b_line, b_col) = extract_location_info(&b_loc);

    a_path
        .cmp(b_path)
        .then_with(|| a_line.cmp(&b_line))
        .then_with(|| a_col.cmp(&b_col))
}

pub fn print(result: &CommandResult, verbose: bool) {
    print_command_output(result);

    if matches!(result.summary, CommandSummary::Check) && result.issues.is_empty() {
        print_success(result.source_files_checked, result.resource_files_checked);
    }

    print_parse_warning(result.parse_error_count, verbose);
}

fn print_command_output(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
        }
        CommandSummary::Add(summary) => {
            print_add(summary);
        }
        CommandSummary::Remove(summary) => {
            print_remove(summary);
        }
        CommandSummary::Sort(summary) => {
            print_sort(summary);
        }
        CommandSummary::Search(summary) => {
            report(&result.issues);
            print_search(summary);
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

fn print_per_file_outcomes(written: &[String], failed: &[(String, String)], skipped: &[String]) {
    for file in written {
        println!("  {} {}", SUCCESS_MARK.green(), file);
    }
    for file in skipped {
        println!("  {} {} {}", "-".dimmed(), file, "(skipped)".dimmed());
    }
    for (file, reason) in failed {
        println!("  {} {}: {}", FAILURE_MARK.red(), file, reason.red());
    }
}

fn print_add(summary: &AddSummary) {
    print_per_file_outcomes(&summary.written, &summary.failed, &summary.skipped);

    let total = summary.written.len() + summary.failed.len() + summary.skipped.len();
    if summary.failed.is_empty() {
        println!(
            "{} \"{}\" to section {} in {} of {} file(s).",
            "Added".green().bold(),
            summary.key,
            summary.section,
            summary.written.len(),
            total
        );
    } else {
        println!(
            "{} \"{}\" written to {} of {} file(s), {} failed.",
            "Partially added".yellow().bold(),
            summary.key,
            summary.written.len(),
            total,
            summary.failed.len()
        );
    }

    if let Some(sections) = &summary.available_sections {
        let listing = if sections.is_empty() {
            "(none)".to_string()
        } else {
            sections.join(", ")
        };
        println!(
            "  {} {} available sections: {}",
            "=".blue(),
            "hint:".bold().cyan(),
            listing
        );
    }
}

fn print_remove(summary: &RemoveSummary) {
    print_per_file_outcomes(&summary.affected_files, &summary.failed, &[]);

    let keys = summary
        .keys
        .iter()
        .map(|k| format!("\"{}\"", k))
        .collect::<Vec<_>>()
        .join(", ");

    if summary.removed_count == 0 {
        println!(
            "{} not found in any resource file.",
            keys
        );
    } else if summary.line_based {
        println!(
            "{} {} line(s) from {} file(s).",
            "Removed".green().bold(),
            summary.removed_count,
            summary.affected_files.len()
        );
    } else {
        println!(
            "{} {} from {} file(s).",
            "Removed".green().bold(),
            keys,
            summary.affected_files.len()
        );
    }
}

fn print_sort(summary: &SortSummary) {
    print_per_file_outcomes(&summary.written, &summary.failed, &[]);
    println!(
        "{} {} file(s).",
        "Sorted".green().bold(),
        summary.written.len()
    );
}

fn print_search(summary: &SearchSummary) {
    if summary.matches.is_empty() {
        println!("No localization matching \"{}\" found.", summary.query);
        return;
    }

    println!(
        "{} {} matching key(s):",
        "Found".green().bold(),
        summary.matches.len()
    );
    for ctx in &summary.matches {
        println!(
            "  {} = \"{}\"  {}",
            ctx.key.bold(),
            ctx.value,
            format!("{}:{}:{}", ctx.file_path(), ctx.line(), ctx.col()).dimmed()
        );
    }

    if summary.occurrences.is_empty() {
        println!("No usages found.");
        return;
    }

    let total = summary.occurrences.len();
    println!("{} {} usage(s):", "Found".green().bold(), total);
    for occ in summary.occurrences.iter().take(MAX_USAGES_DISPLAY) {
        println!(
            "  {}:{}:{} ({})",
            occ.file_path, occ.line, occ.col, occ.key
        );
    }
    if total > MAX_USAGES_DISPLAY {
        println!("  ... and {} more", total - MAX_USAGES_DISPLAY);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "Created .arbrc.json".green()
        );
    }
}
