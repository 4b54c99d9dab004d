//! Resource store scanner.
//!
//! Discovers `.arb` files across the workspace and groups them by their
//! containing folder (the grouping key is the exact directory, no case
//! folding). Files that fail to parse are reported as warnings and skipped
//! during bulk scans; mutation flows that need a definitive reference
//! document go through [`check_languages`], where parse failures are fatal.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

use crate::core::{
    document::ResourceDocument,
    error::{Error, Result},
};

/// File extension of localization resource files.
pub const RESOURCE_EXTENSION: &str = "arb";

/// A warning from scanning resource files.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    pub file_path: String,
    pub error: String,
}

/// The resource documents sharing one containing folder.
///
/// All documents in a group are assumed to share the same sections and keys
/// (translation parity); the engine does not enforce parity, a key missing
/// in one language is simply absent from that document.
#[derive(Debug, Clone)]
pub struct LanguageGroup {
    pub folder: PathBuf,
    pub documents: Vec<ResourceDocument>,
}

impl LanguageGroup {
    /// The reference document used to enumerate sections and keys: the
    /// first language in path order.
    pub fn reference(&self) -> Option<&ResourceDocument> {
        self.documents.first()
    }

    /// Language codes present in the group, in document order.
    pub fn languages(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.language()).collect()
    }
}

/// Result of scanning a workspace for resource files.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub groups: Vec<LanguageGroup>,
    pub warnings: Vec<ScanWarning>,
}

pub fn is_resource_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(RESOURCE_EXTENSION)
}

/// Discover every resource file under `root` and load it into a document
/// model, grouped by containing folder. Groups and their documents come
/// back in path order so every pass over the same tree is deterministic.
pub fn scan(root: &Path) -> ScanOutcome {
    let mut by_folder: BTreeMap<PathBuf, Vec<ResourceDocument>> = BTreeMap::new();
    let mut warnings = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warnings.push(ScanWarning {
                    file_path: e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default(),
                    error: e.to_string(),
                });
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_resource_file(path) {
            continue;
        }

        match ResourceDocument::from_file(path) {
            Ok(document) => {
                let folder = path.parent().unwrap_or(root).to_path_buf();
                by_folder.entry(folder).or_default().push(document);
            }
            Err(e) => warnings.push(ScanWarning {
                file_path: path.display().to_string(),
                error: e.to_string(),
            }),
        }
    }

    let groups = by_folder
        .into_iter()
        .map(|(folder, mut documents)| {
            documents.sort_by(|a, b| a.path().cmp(b.path()));
            LanguageGroup { folder, documents }
        })
        .collect();

    ScanOutcome { groups, warnings }
}

/// Load the language group of a single folder, failing when the folder has
/// no resource files ([`Error::NoLanguagesFound`]) or any of them does not
/// parse (mutations need every language to be definitive before they write
/// anything).
pub fn check_languages(folder: &Path) -> Result<LanguageGroup> {
    let mut paths: Vec<PathBuf> = fs::read_dir(folder)
        .map_err(|e| Error::io(folder, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_resource_file(p))
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in &paths {
        documents.push(ResourceDocument::from_file(path)?);
    }

    if documents.is_empty() {
        return Err(Error::NoLanguagesFound {
            folder: folder.to_path_buf(),
        });
    }

    Ok(LanguageGroup {
        folder: folder.to_path_buf(),
        documents,
    })
}
