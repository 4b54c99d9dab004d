//! Core localization engine.
//!
//! Everything under this module is UI-free: operations take paths and
//! configuration, return typed results or typed errors, and never print or
//! exit. The CLI layer in `crate::cli` is the only consumer-facing surface.
//!
//! ## Module Structure
//!
//! - `document`: ordered, sectioned model of one `.arb` file
//! - `store`: workspace scan and per-folder language groups
//! - `scope`: optional per-folder reference scopes (`scope.yaml`)
//! - `source_scanner`: Dart source file discovery
//! - `index`: which keys are referenced by in-scope source
//! - `detect`: unused-key findings, one analysis pass at a time
//! - `mutate`: lockstep insert, remove, and sort operations
//! - `search`: key/value search plus usage positions

pub mod data;
pub mod detect;
pub mod document;
pub mod error;
pub mod index;
pub mod mutate;
pub mod scope;
pub mod search;
pub mod source_scanner;
pub mod store;

pub use data::{ResourceContext, ResourceLocation};
pub use detect::{AnalysisReport, Diagnostics, UnusedKeyFinding, analyze_unused};
pub use document::{Entry, EntryKind, METADATA_PREFIX, ResourceDocument, SECTION_PREFIX};
pub use error::{Error, Result};
pub use index::{ReferenceIndex, build_index};
pub use mutate::{
    BulkRemoveOutcome, MutationOutcome, insert_localization, remove_localization,
    remove_localizations, sort_document, sort_group,
};
pub use scope::{SCOPE_FILE_NAME, Scope, resolve_scope};
pub use search::{SearchReport, UsageOccurrence, search_localizations};
pub use store::{
    LanguageGroup, RESOURCE_EXTENSION, ScanOutcome, ScanWarning, check_languages, scan,
};
