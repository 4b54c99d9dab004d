use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_add_inserts_into_all_languages_in_lockstep() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        r#"{"@_GREETINGS": {}, "hello": "Hi"}"#,
    )?;
    test.write_file("lib/l10n/nl.arb", r#"{"@_GREETINGS": {}, "hello": "Hoi"}"#)?;

    let output = test.run(&[
        "add",
        "--folder",
        "lib/l10n",
        "--section",
        "GREETINGS",
        "--key",
        "bye",
        "--value",
        "en=Bye",
        "--value",
        "nl=Doei",
    ])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Added"));

    // The new key lands right after the section marker, ahead of the
    // section's existing keys, in canonical formatting.
    assert_eq!(
        test.read_file("lib/l10n/en.arb")?,
        "{\n  \"@_GREETINGS\": {},\n  \"bye\": \"Bye\",\n  \"hello\": \"Hi\"\n}\n"
    );
    assert_eq!(
        test.read_file("lib/l10n/nl.arb")?,
        "{\n  \"@_GREETINGS\": {},\n  \"bye\": \"Doei\",\n  \"hello\": \"Hoi\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_add_creates_new_section() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", r#"{"hello": "Hi"}"#)?;

    let output = test.run(&[
        "add",
        "--folder",
        "lib/l10n",
        "--section",
        "error pages",
        "--key",
        "NotFound",
        "--value",
        "en=Not found",
        "--new-section",
    ])?;

    assert_eq!(output.status.code(), Some(0));
    // Section name is upper-cased with spaces collapsed; key is
    // decapitalized. The first section marker gets no preceding blank line.
    assert_eq!(
        test.read_file("lib/l10n/en.arb")?,
        "{\n  \"hello\": \"Hi\",\n  \"@_ERROR_PAGES\": {},\n  \"notFound\": \"Not found\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_add_existing_key_fails_without_writing() -> Result<()> {
    let original = r#"{"@_GREETINGS": {}, "hello": "Hi"}"#;
    let test = CliTest::with_file("lib/l10n/en.arb", original)?;

    let output = test.run(&[
        "add",
        "--folder",
        "lib/l10n",
        "--section",
        "GREETINGS",
        "--key",
        "hello",
        "--value",
        "en=Hi again",
    ])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.read_file("lib/l10n/en.arb")?, original);
    Ok(())
}

#[test]
fn test_add_rejects_invalid_key_name() -> Result<()> {
    let original = r#"{"@_GREETINGS": {}, "hello": "Hi"}"#;
    let test = CliTest::with_file("lib/l10n/en.arb", original)?;

    let output = test.run(&[
        "add",
        "--folder",
        "lib/l10n",
        "--section",
        "GREETINGS",
        "--key",
        "bad key 9",
        "--value",
        "en=x",
    ])?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.read_file("lib/l10n/en.arb")?, original);
    Ok(())
}

#[test]
fn test_add_requires_value_for_every_language() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", r#"{"@_GREETINGS": {}, "hello": "Hi"}"#)?;
    test.write_file("lib/l10n/nl.arb", r#"{"@_GREETINGS": {}, "hello": "Hoi"}"#)?;

    let output = test.run(&[
        "add",
        "--folder",
        "lib/l10n",
        "--section",
        "GREETINGS",
        "--key",
        "bye",
        "--value",
        "en=Bye",
    ])?;

    assert_eq!(output.status.code(), Some(2));
    let err = crate::stderr(&output);
    assert!(err.contains("nl"), "{err}");
    // Nothing was written.
    assert!(!test.read_file("lib/l10n/en.arb")?.contains("bye"));
    Ok(())
}

#[test]
fn test_add_missing_section_is_per_language_failure() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", r#"{"@_GREETINGS": {}, "hello": "Hi"}"#)?;
    // nl.arb drifted: it lacks the section.
    test.write_file("lib/l10n/nl.arb", r#"{"hello": "Hoi"}"#)?;

    let output = test.run(&[
        "add",
        "--folder",
        "lib/l10n",
        "--section",
        "GREETINGS",
        "--key",
        "bye",
        "--value",
        "en=Bye",
        "--value",
        "nl=Doei",
    ])?;

    // Partial success: en written, nl reported, nothing rolled back.
    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("Partially added"), "{out}");
    assert!(out.contains("available sections: GREETINGS"), "{out}");
    assert!(test.read_file("lib/l10n/en.arb")?.contains("bye"));
    assert!(!test.read_file("lib/l10n/nl.arb")?.contains("bye"));
    Ok(())
}

#[test]
fn test_add_on_empty_folder_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/l10n/.gitkeep", "")?;

    let output = test.run(&[
        "add",
        "--folder",
        "lib/l10n",
        "--section",
        "GREETINGS",
        "--key",
        "bye",
        "--value",
        "en=Bye",
    ])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(crate::stderr(&output).contains("no language files"));
    Ok(())
}
