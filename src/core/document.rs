//! Resource document model for `.arb` localization files.
//!
//! An `.arb` file is a single JSON object. Its keys fall into three kinds,
//! decided once at parse time and carried as a closed enum from then on:
//!
//! - `@_NAME` is a **section marker**; it owns every key entry that follows
//!   it until the next marker.
//! - `@name` is a **metadata entry** for the key `name`; it is serialized
//!   immediately after its owning key and never sorted on its own.
//! - everything else is a plain **key entry** mapping to a translated string.
//!
//! Parsing relies on `serde_json` with `preserve_order` so the document is
//! an ordered sequence of entries, and serialization re-emits that order
//! canonically: 2-space indentation plus exactly one blank line before each
//! section marker except the first.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::core::error::{Error, Result};

/// JSON keys starting with this prefix are section markers.
pub const SECTION_PREFIX: &str = "@_";

/// JSON keys starting with this character (but not [`SECTION_PREFIX`]) are
/// metadata for the key named by the remainder.
pub const METADATA_PREFIX: char = '@';

/// One entry of a resource document, tagged at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    /// `"@_GREETINGS": {}`: a named section marker.
    Section { name: String, value: Value },
    /// `"hello": "Hi"`: a translation key.
    Key { name: String, value: String },
    /// `"@hello": {...}`: metadata owned by the key `hello`. If no such
    /// key exists in the document the entry is inert and only preserved
    /// positionally.
    Metadata { owner: String, value: Value },
}

impl EntryKind {
    /// The JSON object key this entry serializes under.
    pub fn json_key(&self) -> String {
        match self {
            EntryKind::Section { name, .. } => format!("{}{}", SECTION_PREFIX, name),
            EntryKind::Key { name, .. } => name.clone(),
            EntryKind::Metadata { owner, .. } => format!("{}{}", METADATA_PREFIX, owner),
        }
    }

    /// The JSON value this entry serializes to.
    pub fn json_value(&self) -> Value {
        match self {
            EntryKind::Section { value, .. } => value.clone(),
            EntryKind::Key { value, .. } => Value::String(value.clone()),
            EntryKind::Metadata { value, .. } => value.clone(),
        }
    }
}

/// An entry with the textual position it was parsed from.
///
/// `line` is 0-based; `col` is the 1-based column of the entry's opening
/// quote. Entries added by mutations carry `(0, 0)` until the document is
/// written back and re-parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub kind: EntryKind,
    pub line: usize,
    pub col: usize,
}

/// An ordered, sectioned view of one language's resource file.
///
/// The document keeps the raw text it was parsed from so [`locate`] can be
/// recomputed against what is actually on disk rather than inferred from
/// structural position.
///
/// [`locate`]: ResourceDocument::locate
#[derive(Debug, Clone)]
pub struct ResourceDocument {
    path: PathBuf,
    language: String,
    entries: Vec<Entry>,
    raw: String,
}

impl ResourceDocument {
    /// Parse raw `.arb` text into an ordered entry sequence.
    ///
    /// Fails with [`Error::MalformedResource`] when the text is not a JSON
    /// object or a plain key maps to a non-string value.
    pub fn parse(path: impl Into<PathBuf>, raw: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let raw = raw.into();

        let value: Value = serde_json::from_str(&raw).map_err(|e| Error::MalformedResource {
            path: path.clone(),
            message: e.to_string(),
        })?;

        let Value::Object(map) = value else {
            return Err(Error::MalformedResource {
                path,
                message: "root must be a JSON object".to_string(),
            });
        };

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in &map {
            let kind = classify(key, value, &path)?;
            let (line, col) = locate_in(&raw, key).unwrap_or((0, 0));
            entries.push(Entry { kind, line, col });
        }

        let language = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            path,
            language,
            entries,
            raw,
        })
    }

    /// Read and parse a resource file from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(path, raw)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Language code, taken from the file stem (`en.arb` → `en`).
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn set_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
    }

    /// Plain translation keys, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|e| match &e.kind {
            EntryKind::Key { name, .. } => Some(name.as_str()),
            _ => None,
        })
    }

    /// The translated value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find_map(|e| match &e.kind {
            EntryKind::Key { name, value } if name == key => Some(value.as_str()),
            _ => None,
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Section names present in the document, sorted.
    pub fn sections(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .iter()
            .filter_map(|e| match &e.kind {
                EntryKind::Section { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        names.sort_unstable();
        names
    }

    /// Append a new empty section marker at the end of the document.
    pub fn append_section(&mut self, name: &str) {
        self.entries.push(Entry {
            kind: EntryKind::Section {
                name: name.to_string(),
                value: Value::Object(Map::new()),
            },
            line: 0,
            col: 0,
        });
    }

    /// Insert a new key entry immediately after the named section marker,
    /// ahead of the section's existing keys.
    pub fn insert_after_section(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        let pos = self
            .entries
            .iter()
            .position(|e| matches!(&e.kind, EntryKind::Section { name, .. } if name == section))
            .ok_or_else(|| Error::SectionNotFound {
                section: section.to_string(),
                path: self.path.clone(),
            })?;

        self.entries.insert(
            pos + 1,
            Entry {
                kind: EntryKind::Key {
                    name: key.to_string(),
                    value: value.to_string(),
                },
                line: 0,
                col: 0,
            },
        );
        Ok(())
    }

    /// Remove the key entry with this name. Returns false when the key is
    /// absent (no-op). Metadata owned by the key is left in place and
    /// becomes inert.
    pub fn remove_key(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|e| !matches!(&e.kind, EntryKind::Key { name, .. } if name == key));
        self.entries.len() != before
    }

    /// Position of the key in the raw text this document was parsed from:
    /// 0-based line and 1-based column of the opening quote.
    ///
    /// Recomputed from the raw text on every call; structural order and
    /// textual position can diverge between a mutation and its write-back.
    pub fn locate(&self, key: &str) -> Option<(usize, usize)> {
        locate_in(&self.raw, key)
    }

    /// Serialize to canonical text: 2-space-indented JSON, one blank line
    /// before each section marker except the first, each metadata entry
    /// directly after its owning key. Entry order is otherwise preserved;
    /// sorting is a separate operation.
    pub fn serialize(&self) -> String {
        let mut map = Map::new();
        for entry in self.serialized_order() {
            map.insert(entry.kind.json_key(), entry.kind.json_value());
        }
        let pretty = serde_json::to_string_pretty(&Value::Object(map))
            .expect("an in-memory JSON object always serializes");
        format_sections(&pretty)
    }

    /// Write the canonical serialization back to the document's path.
    pub fn write_back(&self) -> Result<()> {
        let content = format!("{}\n", self.serialize());
        fs::write(&self.path, content).map_err(|e| Error::io(&self.path, e))
    }

    /// Entry order for serialization: document order, with each owned
    /// metadata entry relocated to sit directly after its owning key.
    /// Ownerless metadata keeps its parsed position.
    fn serialized_order(&self) -> Vec<&Entry> {
        let owners: HashSet<&str> = self.keys().collect();

        let mut out = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            if let EntryKind::Metadata { owner, .. } = &entry.kind
                && owners.contains(owner.as_str())
            {
                continue;
            }
            out.push(entry);
            if let EntryKind::Key { name, .. } = &entry.kind {
                for meta in &self.entries {
                    if let EntryKind::Metadata { owner, .. } = &meta.kind
                        && owner == name
                    {
                        out.push(meta);
                    }
                }
            }
        }
        out
    }
}

fn classify(key: &str, value: &Value, path: &Path) -> Result<EntryKind> {
    if let Some(name) = key.strip_prefix(SECTION_PREFIX) {
        return Ok(EntryKind::Section {
            name: name.to_string(),
            value: value.clone(),
        });
    }
    if let Some(owner) = key.strip_prefix(METADATA_PREFIX) {
        return Ok(EntryKind::Metadata {
            owner: owner.to_string(),
            value: value.clone(),
        });
    }
    match value {
        Value::String(s) => Ok(EntryKind::Key {
            name: key.to_string(),
            value: s.clone(),
        }),
        other => Err(Error::MalformedResource {
            path: path.to_path_buf(),
            message: format!(
                "key \"{}\" must map to a string, found {}",
                key,
                json_type_name(other)
            ),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Find a JSON key in raw text: the first line occurrence of `"key"` that
/// is followed by a colon (so matches inside values are skipped). Returns
/// 0-based line and 1-based column of the opening quote.
fn locate_in(raw: &str, key: &str) -> Option<(usize, usize)> {
    let needle = format!("\"{}\"", key);
    for (line_no, line) in raw.lines().enumerate() {
        let mut from = 0;
        while let Some(rel) = line[from..].find(&needle) {
            let at = from + rel;
            let after = at + needle.len();
            if line[after..].trim_start().starts_with(':') {
                return Some((line_no, at + 1));
            }
            from = at + 1;
        }
    }
    None
}

/// Insert one blank line before every section marker line except the first
/// marker in the document.
fn format_sections(pretty: &str) -> String {
    let marker = format!("\"{}", SECTION_PREFIX);
    let mut out = String::with_capacity(pretty.len() + 16);
    let mut seen_section = false;

    for (i, line) in pretty.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if line.trim_start().starts_with(&marker) {
            if seen_section {
                out.push('\n');
            }
            seen_section = true;
        }
        out.push_str(line);
    }
    out
}
