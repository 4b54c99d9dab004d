//! Typed errors for the localization engine.
//!
//! The engine never exits the process and never prints on its own: every
//! fallible operation returns one of these variants so callers (the CLI
//! layer, tests) can decide how to surface it. The CLI wraps engine errors
//! with `anyhow::Context` at the boundary.

use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Resource file exists but is not a valid JSON object of translations.
    ///
    /// Skip-and-warn during bulk scans; fatal for operations that need a
    /// definitive reference document (insert, sort).
    #[error("{}: not a valid localization resource: {message}", .path.display())]
    MalformedResource { path: PathBuf, message: String },

    /// A folder expected to hold at least one readable `.arb` file has none.
    #[error("no language files found in {}", .folder.display())]
    NoLanguagesFound { folder: PathBuf },

    /// Insert target key collides with an existing key in the reference
    /// language.
    #[error("localization \"{key}\" already exists")]
    KeyAlreadyExists { key: String },

    /// Key name failed validation (letters only, after normalization).
    #[error("invalid localization name \"{name}\": only letters are allowed")]
    InvalidKeyName { name: String },

    /// Section name failed validation (upper-case letters, underscores and
    /// spaces only).
    #[error("invalid section name \"{name}\": only letters, underscores, and spaces are allowed")]
    InvalidSectionName { name: String },

    /// Insert named a section that is absent from one language's document
    /// and the create-new-section branch did not apply.
    #[error("section \"{section}\" not found in {}", .path.display())]
    SectionNotFound { section: String, path: PathBuf },

    /// A scope declaration file is present but unparsable. Non-fatal: the
    /// resolver treats the folder as unrestricted and surfaces this as a
    /// warning.
    #[error("{}: malformed scope declaration: {message}", .path.display())]
    ScopeConfigMalformed { path: PathBuf, message: String },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
