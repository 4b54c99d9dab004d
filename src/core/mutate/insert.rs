//! Lockstep insertion of a new localization across all language files.

use std::collections::BTreeMap;

use crate::core::{
    error::{Error, Result},
    mutate::MutationOutcome,
    store::LanguageGroup,
};
use crate::utils::decapitalize_first_char;

/// Validate and normalize a new localization key name: trimmed, first
/// character lower-cased, ASCII letters only.
pub fn normalize_key_name(raw: &str) -> Result<String> {
    let name = decapitalize_first_char(raw.trim());
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidKeyName { name });
    }
    Ok(name)
}

/// Validate and normalize a section name. Newly created sections are
/// upper-cased first; valid names consist of upper-case letters,
/// underscores and spaces, and whitespace runs collapse to a single
/// underscore.
pub fn normalize_section_name(raw: &str, is_new_section: bool) -> Result<String> {
    let mut name = raw.trim().to_string();
    if is_new_section {
        name = name.to_uppercase();
    }
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c == '_' || c == ' ')
    {
        return Err(Error::InvalidSectionName { name });
    }
    Ok(name.split_whitespace().collect::<Vec<_>>().join("_"))
}

/// Insert a new key with one value per language into every document of the
/// group, immediately after the target section marker and ahead of the
/// section's existing keys.
///
/// Validation runs up front, before any file is touched: an invalid key or
/// section name, or a key that already exists in the reference language,
/// aborts the whole operation. Per-language failures after that point
/// (section missing from one language, write error) are collected in the
/// outcome without aborting sibling writes.
pub fn insert_localization(
    group: &LanguageGroup,
    section: &str,
    key: &str,
    values: &BTreeMap<String, String>,
    is_new_section: bool,
) -> Result<MutationOutcome> {
    let key = normalize_key_name(key)?;
    let section = normalize_section_name(section, is_new_section)?;

    let reference = group
        .reference()
        .ok_or_else(|| Error::NoLanguagesFound {
            folder: group.folder.clone(),
        })?;
    if reference.contains_key(&key) {
        return Err(Error::KeyAlreadyExists { key });
    }

    let mut outcome = MutationOutcome::default();

    for document in &group.documents {
        let Some(value) = values.get(document.language()) else {
            outcome.skipped.push(document.path().to_path_buf());
            continue;
        };

        let mut document = document.clone();
        if is_new_section && !document.sections().contains(&section.as_str()) {
            document.append_section(&section);
        }

        let result = document
            .insert_after_section(&section, &key, value)
            .and_then(|()| document.write_back());

        match result {
            Ok(()) => outcome.written.push(document.path().to_path_buf()),
            Err(e) => outcome.failed.push((document.path().to_path_buf(), e)),
        }
    }

    Ok(outcome)
}
