use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_search_finds_key_and_usages() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        "{\n  \"welcomeMessage\": \"Welcome!\"\n}\n",
    )?;
    test.write_file(
        "lib/page.dart",
        "Widget build() {\n  return Text(l10n.welcomeMessage);\n}\n",
    )?;

    let output = test.run(&["search", "welcome"])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("welcomeMessage = \"Welcome!\""), "{out}");
    assert!(out.contains("lib/page.dart:2:20 (welcomeMessage)"), "{out}");
    Ok(())
}

#[test]
fn test_search_matches_translated_value() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        "{\n  \"farewell\": \"See you later\"\n}\n",
    )?;

    let output = test.run(&["search", "see you"])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("farewell"), "{out}");
    assert!(out.contains("No usages found."), "{out}");
    Ok(())
}

#[test]
fn test_search_without_match() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", "{\n  \"hello\": \"Hi\"\n}\n")?;

    let output = test.run(&["search", "nothing"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("No localization matching \"nothing\" found."));
    Ok(())
}
