//! Structure-preserving mutations of resource files.
//!
//! Every mutation follows the same shape: re-read the current documents,
//! edit the in-memory entry sequence, re-serialize canonically, write each
//! language file back. There is no transaction across files (a failed
//! write does not roll back siblings already written), so each operation
//! returns a per-file outcome value instead of throwing away what
//! happened.

mod insert;
mod remove;
mod sort;

use std::path::PathBuf;

pub use insert::insert_localization;
pub use remove::{BulkRemoveOutcome, remove_localization, remove_localizations};
pub use sort::{sort_document, sort_group};

use crate::core::error::Error;

/// Per-file outcomes of a multi-file mutation.
///
/// Partial success is a first-class value: files in `written` stay
/// written even when siblings land in `failed`.
#[derive(Debug, Default)]
pub struct MutationOutcome {
    /// Files successfully rewritten.
    pub written: Vec<PathBuf>,
    /// Files whose edit or write failed, with the reason.
    pub failed: Vec<(PathBuf, Error)>,
    /// Files skipped because the operation did not apply to them
    /// (no value supplied for the language, key not present).
    pub skipped: Vec<PathBuf>,
}

impl MutationOutcome {
    pub fn is_total_success(&self) -> bool {
        self.failed.is_empty()
    }
}
