//! Unused-key detection.
//!
//! Cross-references every language group's keys against the reference
//! index, restricted to the group's resolved scope, and reports one
//! finding per physical key occurrence that has no reference anywhere in
//! the in-scope source.
//!
//! Each analysis pass is a full re-scan: documents are loaded fresh from
//! disk, positions are recomputed against the file content read in this
//! pass, and the produced findings supersede the previous pass's findings
//! wholesale (see [`Diagnostics`]).

use std::{collections::BTreeSet, path::Path};

use crate::{
    config::Config,
    core::{
        data::{ResourceContext, ResourceLocation},
        error::Error,
        index::build_index,
        scope::resolve_scope,
        source_scanner::scan_source_files,
        store::{self, ScanWarning},
    },
};

/// A localization key that is defined but never referenced in its scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedKeyFinding {
    pub context: ResourceContext,
}

/// Everything one analysis pass produced.
#[derive(Debug, Default)]
pub struct AnalysisReport {
    pub findings: Vec<UnusedKeyFinding>,
    /// Resource files that could not be parsed and were skipped.
    pub scan_warnings: Vec<ScanWarning>,
    /// Scope declarations that were present but malformed (non-fatal).
    pub scope_warnings: Vec<Error>,
    pub resource_files_checked: usize,
    pub source_files_checked: usize,
    /// Source paths skipped due to access errors.
    pub source_paths_skipped: usize,
}

/// The currently published findings.
///
/// Owned by the orchestrator and passed through each pass explicitly; a
/// new pass replaces the previous findings wholesale so nothing stale can
/// linger once a key becomes referenced or its document disappears.
#[derive(Debug, Default)]
pub struct Diagnostics {
    findings: Vec<UnusedKeyFinding>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the previously published findings, then publish the new set.
    pub fn replace(&mut self, findings: Vec<UnusedKeyFinding>) {
        self.findings.clear();
        self.findings = findings;
    }

    pub fn clear(&mut self) {
        self.findings.clear();
    }

    pub fn findings(&self) -> &[UnusedKeyFinding] {
        &self.findings
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Run one unused-key analysis pass over the workspace.
///
/// For every language group: resolve its scope, build the reference index
/// over the in-scope source files, and emit a finding for each key
/// occurrence (a key defined in three language files with no reference
/// yields three findings, one per file), with line/column recomputed from
/// the file content read in this pass.
pub fn analyze_unused(root: &Path, config: &Config, verbose: bool) -> AnalysisReport {
    let base_dir = root.to_string_lossy();

    // Resource and source discovery are independent; run them in parallel.
    let (resources, sources) = rayon::join(
        || store::scan(root),
        || {
            scan_source_files(
                &base_dir,
                &config.includes,
                &config.ignores,
                config.ignore_test_files,
                verbose,
            )
        },
    );

    let mut findings = Vec::new();
    let mut scope_warnings = Vec::new();
    let mut resource_files_checked = 0;

    for group in &resources.groups {
        resource_files_checked += group.documents.len();

        let (scope, warning) = resolve_scope(&group.folder);
        if let Some(w) = warning {
            scope_warnings.push(w);
        }

        // Union of keys across the group's documents; a key missing from
        // one language still counts for the others.
        let keys: Vec<String> = group
            .documents
            .iter()
            .flat_map(|d| d.keys())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let index = build_index(&keys, &sources.files, &scope);

        for document in &group.documents {
            for key in document.keys() {
                if index.is_referenced(key) {
                    continue;
                }
                let Some((line, col)) = document.locate(key) else {
                    continue;
                };
                findings.push(UnusedKeyFinding {
                    context: ResourceContext::new(
                        ResourceLocation::new(document.path().display().to_string(), line + 1, col),
                        key,
                        document.get(key).unwrap_or_default(),
                    ),
                });
            }
        }
    }

    // Sort by file path, then line, then key for deterministic output
    findings.sort_by(|a, b| {
        a.context
            .location
            .file_path
            .cmp(&b.context.location.file_path)
            .then_with(|| a.context.location.line.cmp(&b.context.location.line))
            .then_with(|| a.context.key.cmp(&b.context.key))
    });

    AnalysisReport {
        findings,
        scan_warnings: resources.warnings,
        scope_warnings,
        resource_files_checked,
        source_files_checked: sources.files.len(),
        source_paths_skipped: sources.skipped_count,
    }
}
