use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_remove_key_from_all_languages() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        r#"{"hello": "Hi", "bye": "Bye"}"#,
    )?;
    test.write_file("lib/l10n/nl.arb", r#"{"hello": "Hoi", "bye": "Doei"}"#)?;

    let output = test.run(&["remove", "--folder", "lib/l10n", "bye"])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("Removed \"bye\" from 2 file(s)."), "{out}");

    assert_eq!(
        test.read_file("lib/l10n/en.arb")?,
        "{\n  \"hello\": \"Hi\"\n}\n"
    );
    assert_eq!(
        test.read_file("lib/l10n/nl.arb")?,
        "{\n  \"hello\": \"Hoi\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_remove_then_check_reports_nothing() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", r#"{"ghost": "Boo"}"#)?;
    test.write_file("lib/l10n/nl.arb", r#"{"ghost": "Boe"}"#)?;

    let output = test.run(&["remove", "--folder", "lib/l10n", "ghost"])?;
    assert_eq!(output.status.code(), Some(0));

    let output = test.run(&["check"])?;
    assert_eq!(output.status.code(), Some(0));
    assert!(!stdout(&output).contains("ghost"));
    Ok(())
}

#[test]
fn test_remove_missing_key_reports_not_found() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", r#"{"hello": "Hi"}"#)?;

    let output = test.run(&["remove", "--folder", "lib/l10n", "missing"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("not found"));
    Ok(())
}

#[test]
fn test_remove_lines_bulk() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        "{\n  \"hello\": \"Hi\",\n  \"bye\": \"Bye\",\n  \"stay\": \"Stay\"\n}\n",
    )?;
    test.write_file(
        "lib/l10n/nl.arb",
        "{\n  \"hello\": \"Hoi\",\n  \"bye\": \"Doei\",\n  \"stay\": \"Blijf\"\n}\n",
    )?;

    let output = test.run(&["remove", "--folder", "lib/l10n", "--lines", "hello", "bye"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Removed 4 line(s) from 2 file(s)."));

    let en = test.read_file("lib/l10n/en.arb")?;
    assert!(!en.contains("hello"));
    assert!(!en.contains("bye"));
    assert!(en.contains("stay"));
    Ok(())
}

#[test]
fn test_remove_lines_first_match_can_hit_a_value() -> Result<()> {
    // Known limitation of line-based removal: a value consisting of the
    // quoted key text on an earlier line is removed instead of the key.
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        "{\n  \"farewell\": \"bye\",\n  \"bye\": \"Bye\"\n}\n",
    )?;

    let output = test.run(&["remove", "--folder", "lib/l10n", "--lines", "bye"])?;

    assert_eq!(output.status.code(), Some(0));
    let en = test.read_file("lib/l10n/en.arb")?;
    assert!(!en.contains("farewell"));
    assert!(en.contains("\"bye\": \"Bye\""));
    Ok(())
}

#[test]
fn test_remove_multiple_keys_document_based() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        r#"{"hello": "Hi", "bye": "Bye", "stay": "Stay"}"#,
    )?;

    let output = test.run(&["remove", "--folder", "lib/l10n", "hello", "bye"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        test.read_file("lib/l10n/en.arb")?,
        "{\n  \"stay\": \"Stay\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_remove_from_empty_folder_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("lib/l10n/.gitkeep", "")?;

    let output = test.run(&["remove", "--folder", "lib/l10n", "bye"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(crate::stderr(&output).contains("no language files"));
    Ok(())
}
