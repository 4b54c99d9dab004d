//! Removal of localization keys across a folder's language files.
//!
//! Two variants exist, mirroring how findings are cleaned up:
//!
//! - [`remove_localization`] is document-based: parse, drop the key entry,
//!   write the canonical serialization back.
//! - [`remove_localizations`] is line-based bulk removal: per file, delete
//!   at most the first textual line containing each exact quoted key.
//!   First-match-wins keeps a key from deleting more than one line, but a
//!   *value* that consists of the quoted key text can still be hit first,
//!   a known limitation covered by a test and deliberately not
//!   fixed here.

use std::{fs, path::Path};

use crate::core::{
    error::{Error, Result},
    mutate::MutationOutcome,
    store::{check_languages, is_resource_file},
};

/// Remove one key from every resource document in the folder.
///
/// Files not containing the key are skipped. Returns which files were
/// rewritten; per-file write failures are collected without aborting the
/// remaining files.
pub fn remove_localization(folder: &Path, key: &str) -> Result<MutationOutcome> {
    let group = check_languages(folder)?;
    let mut outcome = MutationOutcome::default();

    for document in &group.documents {
        let mut document = document.clone();
        if !document.remove_key(key) {
            outcome.skipped.push(document.path().to_path_buf());
            continue;
        }
        match document.write_back() {
            Ok(()) => outcome.written.push(document.path().to_path_buf()),
            Err(e) => outcome.failed.push((document.path().to_path_buf(), e)),
        }
    }

    Ok(outcome)
}

/// Outcome of a bulk line-based removal.
#[derive(Debug, Default)]
pub struct BulkRemoveOutcome {
    /// Number of lines removed across all files.
    pub removed: usize,
    pub files: MutationOutcome,
}

/// Remove the given keys from every resource file in the folder by
/// deleting raw lines: per file, the first line containing the exact
/// quoted key is removed, once per key.
pub fn remove_localizations(folder: &Path, keys: &[String]) -> Result<BulkRemoveOutcome> {
    let mut paths: Vec<_> = fs::read_dir(folder)
        .map_err(|e| Error::io(folder, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_resource_file(p))
        .collect();
    paths.sort();

    let needles: Vec<String> = keys.iter().map(|k| format!("\"{}\"", k)).collect();
    let mut outcome = BulkRemoveOutcome::default();

    for path in paths {
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                let err = Error::io(&path, e);
                outcome.files.failed.push((path, err));
                continue;
            }
        };

        // split('\n') rather than lines(): a trailing newline survives the
        // join unchanged.
        let mut lines: Vec<&str> = raw.split('\n').collect();
        let mut remaining: Vec<&String> = needles.iter().collect();
        let mut removed_here = 0;

        let mut i = 0;
        while i < lines.len() && !remaining.is_empty() {
            if let Some(hit) = remaining
                .iter()
                .position(|needle| lines[i].contains(needle.as_str()))
            {
                lines.remove(i);
                remaining.remove(hit);
                removed_here += 1;
                // Re-examine the line that slid into this slot.
                continue;
            }
            i += 1;
        }

        if removed_here == 0 {
            outcome.files.skipped.push(path);
            continue;
        }

        match fs::write(&path, lines.join("\n")) {
            Ok(()) => {
                outcome.removed += removed_here;
                outcome.files.written.push(path);
            }
            Err(e) => {
                let err = Error::io(&path, e);
                outcome.files.failed.push((path, err));
            }
        }
    }

    Ok(outcome)
}
