use std::collections::BTreeMap;

use anyhow::{Result, bail};

use super::helper::finish;
use super::{AddSummary, CommandResult, CommandSummary};
use crate::{
    cli::args::AddCommand,
    core::{Error, check_languages, insert_localization},
};

/// Parse repeated `--value <language>=<text>` arguments and require one
/// value per language before any file is touched.
fn parse_values(raw: &[String], languages: &[&str]) -> Result<BTreeMap<String, String>> {
    let mut values = BTreeMap::new();
    for item in raw {
        let Some((language, text)) = item.split_once('=') else {
            bail!("Invalid --value \"{}\": expected <language>=<text>", item);
        };
        values.insert(language.trim().to_string(), text.to_string());
    }

    let missing: Vec<&str> = languages
        .iter()
        .filter(|lang| !values.contains_key(**lang))
        .copied()
        .collect();
    if !missing.is_empty() {
        bail!(
            "Missing translation for language(s): {} (pass --value <language>=<text>)",
            missing.join(", ")
        );
    }

    Ok(values)
}

pub fn add(cmd: AddCommand) -> Result<CommandResult> {
    let group = check_languages(&cmd.folder)?;
    let values = parse_values(&cmd.values, &group.languages())?;

    let available_sections: Vec<String> = group
        .reference()
        .map(|doc| doc.sections().iter().map(|s| s.to_string()).collect())
        .unwrap_or_default();

    let outcome = insert_localization(&group, &cmd.section, &cmd.key, &values, cmd.new_section)?;

    let section_missing = outcome
        .failed
        .iter()
        .any(|(_, e)| matches!(e, Error::SectionNotFound { .. }));

    let failed: Vec<(String, String)> = outcome
        .failed
        .iter()
        .map(|(path, e)| (path.display().to_string(), e.to_string()))
        .collect();
    let error_count = failed.len();

    let summary = AddSummary {
        key: cmd.key.clone(),
        section: cmd.section.clone(),
        written: outcome
            .written
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        failed,
        skipped: outcome
            .skipped
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
        available_sections: section_missing.then_some(available_sections),
    };

    let mut result = finish(
        CommandSummary::Add(summary),
        Vec::new(),
        0,
        group.documents.len(),
        false,
    );
    result.error_count += error_count;
    Ok(result)
}
