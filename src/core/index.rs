//! Reference index builder.
//!
//! Decides, per localization key, whether any in-scope source file
//! references it. A reference is a textual occurrence of `.` followed by
//! the key at a word boundary, the member-access shape of the generated
//! localization accessor (`context.l10n.welcomeMessage`). Source is never
//! parsed as a language; candidate files are not guaranteed to be
//! parseable and the heuristic is intentional.

use std::collections::HashSet;

use rayon::prelude::*;
use regex::RegexSet;

use crate::core::scope::Scope;

/// Which keys have at least one reference in the candidate sources.
#[derive(Debug, Default)]
pub struct ReferenceIndex {
    used: HashSet<String>,
}

impl ReferenceIndex {
    pub fn is_referenced(&self, key: &str) -> bool {
        self.used.contains(key)
    }

    pub fn used_keys(&self) -> &HashSet<String> {
        &self.used
    }
}

/// Build the reference index for one scope group.
///
/// Every candidate file is read and decoded exactly once per invocation;
/// all keys are matched against that one text through a single compiled
/// regex set, so the cost is O(files), not O(files × keys) reads. File
/// reads fan out in parallel and the per-file match sets are unioned once
/// all reads completed. A file that cannot be read or a pattern set that
/// cannot be compiled degrades to "no references found": an unused-key
/// false positive is surfaced for review instead of hiding findings.
pub fn build_index(keys: &[String], files: &HashSet<String>, scope: &Scope) -> ReferenceIndex {
    let candidates: Vec<&String> = files.iter().filter(|f| scope.admits(f)).collect();
    if keys.is_empty() || candidates.is_empty() {
        return ReferenceIndex::default();
    }

    let patterns: Vec<String> = keys
        .iter()
        .map(|k| format!(r"\.{}\b", regex::escape(k)))
        .collect();
    let set = match RegexSet::new(&patterns) {
        Ok(set) => set,
        Err(_) => return ReferenceIndex::default(),
    };

    let used_ids = candidates
        .par_iter()
        .filter_map(|path| std::fs::read_to_string(path.as_str()).ok())
        .map(|text| set.matches(&text).into_iter().collect::<HashSet<usize>>())
        .reduce(HashSet::new, |mut acc, matched| {
            acc.extend(matched);
            acc
        });

    ReferenceIndex {
        used: used_ids.into_iter().map(|i| keys[i].clone()).collect(),
    }
}
