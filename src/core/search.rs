//! Localization search.
//!
//! Matches a query against keys and translated values across all resource
//! documents (case-insensitive), then reports every usage occurrence of
//! the matched keys in the workspace's source files.

use std::path::Path;

use rayon::prelude::*;
use regex::Regex;

use crate::{
    config::Config,
    core::{
        data::{ResourceContext, ResourceLocation},
        source_scanner::scan_source_files,
        store::{self, ScanWarning},
    },
};

/// One usage of a key in a source file. 1-indexed line and column.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct UsageOccurrence {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
    pub key: String,
}

/// Result of one search pass.
#[derive(Debug, Default)]
pub struct SearchReport {
    /// Key definitions whose key or value matched the query.
    pub matches: Vec<ResourceContext>,
    /// Source usages of the matched keys.
    pub occurrences: Vec<UsageOccurrence>,
    pub warnings: Vec<ScanWarning>,
}

/// Search all resource documents for keys or values containing the query
/// (case-insensitive) and collect the source usages of every matched key.
pub fn search_localizations(root: &Path, config: &Config, query: &str, verbose: bool) -> SearchReport {
    let needle = query.to_lowercase();
    let resources = store::scan(root);

    let mut matches = Vec::new();
    let mut keys: Vec<String> = Vec::new();

    for group in &resources.groups {
        for document in &group.documents {
            for key in document.keys() {
                let value = document.get(key).unwrap_or_default();
                if !key.to_lowercase().contains(&needle)
                    && !value.to_lowercase().contains(&needle)
                {
                    continue;
                }
                let (line, col) = document.locate(key).unwrap_or((0, 0));
                matches.push(ResourceContext::new(
                    ResourceLocation::new(document.path().display().to_string(), line + 1, col),
                    key,
                    value,
                ));
                if !keys.iter().any(|k| k == key) {
                    keys.push(key.to_string());
                }
            }
        }
    }

    let occurrences = if keys.is_empty() {
        Vec::new()
    } else {
        find_usages(root, config, &keys, verbose)
    };

    SearchReport {
        matches,
        occurrences,
        warnings: resources.warnings,
    }
}

/// Scan source files for `.key` word-boundary usages of the given keys.
/// Each file is read once; all keys are matched against that one text.
fn find_usages(root: &Path, config: &Config, keys: &[String], verbose: bool) -> Vec<UsageOccurrence> {
    let base_dir = root.to_string_lossy();
    let sources = scan_source_files(
        &base_dir,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
        verbose,
    );

    let patterns: Vec<(String, Regex)> = keys
        .iter()
        .filter_map(|k| {
            Regex::new(&format!(r"\.{}\b", regex::escape(k)))
                .ok()
                .map(|re| (k.clone(), re))
        })
        .collect();

    let mut occurrences: Vec<UsageOccurrence> = sources
        .files
        .par_iter()
        .filter_map(|path| {
            std::fs::read_to_string(path)
                .ok()
                .map(|text| (path, text))
        })
        .flat_map_iter(|(path, text)| {
            let line_index = build_line_index(&text);
            let mut found = Vec::new();
            for (key, re) in &patterns {
                for m in re.find_iter(&text) {
                    // Skip the leading dot so the position points at the key.
                    let offset = m.start() + 1;
                    let line = offset_to_line(&line_index, offset);
                    let col = offset - line_index[line - 1] + 1;
                    found.push(UsageOccurrence {
                        file_path: path.clone(),
                        line,
                        col,
                        key: key.clone(),
                    });
                }
            }
            found
        })
        .collect();

    occurrences.sort();
    occurrences
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset using binary search.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}
