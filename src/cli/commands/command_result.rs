use crate::core::{ResourceContext, UsageOccurrence};
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Add(AddSummary),
    Remove(RemoveSummary),
    Sort(SortSummary),
    Search(SearchSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AddSummary {
    pub key: String,
    pub section: String,
    /// Language files the key was written to.
    pub written: Vec<String>,
    /// Language files whose write failed, with the reason.
    pub failed: Vec<(String, String)>,
    /// Language files skipped because no value was supplied.
    pub skipped: Vec<String>,
    /// Sections of the reference document, shown as a hint when a
    /// section could not be found.
    pub available_sections: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct RemoveSummary {
    pub keys: Vec<String>,
    /// Files a key was removed from.
    pub affected_files: Vec<String>,
    pub failed: Vec<(String, String)>,
    /// Number of removals (line-based: lines removed).
    pub removed_count: usize,
    pub line_based: bool,
}

#[derive(Debug)]
pub struct SortSummary {
    pub written: Vec<String>,
    pub failed: Vec<(String, String)>,
}

#[derive(Debug)]
pub struct SearchSummary {
    pub query: String,
    /// Matched key definitions.
    pub matches: Vec<ResourceContext>,
    /// Source usages of the matched keys.
    pub occurrences: Vec<UsageOccurrence>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running arb commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Per-file mutation failures and error-severity issues.
    pub error_count: usize,
    /// Unused-key findings from analysis.
    pub finding_count: usize,
    /// If true, exit code 1 should be returned when findings exist.
    /// False for commands where findings are informational.
    pub exit_on_findings: bool,
    /// All issues found during the pass. Empty for mutation commands.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of source files (Dart) that were scanned.
    pub source_files_checked: usize,
    /// Number of resource files (.arb) that were scanned.
    pub resource_files_checked: usize,
}
