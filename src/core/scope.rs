//! Per-folder reference scopes.
//!
//! A language group may declare which source subtrees are allowed to
//! reference its keys through an optional `scope.yaml` colocated with the
//! resource folder:
//!
//! ```yaml
//! scope:
//!   - lib/feature_login
//!   - lib/shared
//! ```
//!
//! No declaration means the whole workspace is in scope.

use std::{fs, path::Path};

use serde::Deserialize;

use crate::core::error::Error;

/// File name of the optional scope declaration inside a resource folder.
pub const SCOPE_FILE_NAME: &str = "scope.yaml";

#[derive(Debug, Deserialize)]
struct ScopeFile {
    #[serde(default)]
    scope: Option<Vec<String>>,
}

/// The resolved scope of a language group: the path prefixes a source file
/// must contain to be eligible to reference the group's keys.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    prefixes: Vec<String>,
}

impl Scope {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// An empty prefix list means the entire workspace is in scope.
    pub fn is_unrestricted(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Whether a source file path is eligible under this scope.
    ///
    /// Matching is substring containment over the whole path, not
    /// path-segment matching: a declared prefix `feature` admits a file
    /// under `feature2/`. This is documented current behavior.
    pub fn admits(&self, path: &str) -> bool {
        self.prefixes.is_empty() || self.prefixes.iter().any(|p| path.contains(p.as_str()))
    }
}

/// Read a folder's optional scope declaration.
///
/// Absent files resolve to an unrestricted scope. Unreadable or malformed
/// declarations also resolve to unrestricted, with the problem reported in
/// the second tuple slot so callers can surface it as a warning; it is
/// never fatal.
pub fn resolve_scope(folder: &Path) -> (Scope, Option<Error>) {
    let path = folder.join(SCOPE_FILE_NAME);
    if !path.exists() {
        return (Scope::unrestricted(), None);
    }

    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => return (Scope::unrestricted(), Some(Error::io(&path, e))),
    };

    match serde_yaml::from_str::<ScopeFile>(&raw) {
        Ok(file) => (Scope::new(file.scope.unwrap_or_default()), None),
        Err(e) => (
            Scope::unrestricted(),
            Some(Error::ScopeConfigMalformed {
                path,
                message: e.to_string(),
            }),
        ),
    }
}
