use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_unused_key_reported_with_position() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        "{\n  \"hello\": \"Hi\",\n  \"ghost\": \"Boo\"\n}\n",
    )?;
    test.write_file("lib/page.dart", "Text(context.l10n.hello);\n")?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(1));
    let out = stdout(&output);
    assert!(out.contains("warning: \"ghost\"  unused-key"), "{out}");
    assert!(out.contains("lib/l10n/en.arb:3:3"), "{out}");
    assert!(!out.contains("\"hello\""), "{out}");
    Ok(())
}

#[test]
fn test_clean_workspace_exits_zero() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", "{\n  \"hello\": \"Hi\"\n}\n")?;
    test.write_file("lib/page.dart", "Text(l10n.hello);\n")?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("no unused keys found"));
    Ok(())
}

#[test]
fn test_finding_per_language_file() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", "{\n  \"ghost\": \"Boo\"\n}\n")?;
    test.write_file("lib/l10n/nl.arb", "{\n  \"ghost\": \"Boe\"\n}\n")?;
    test.write_file("lib/l10n/sv.arb", "{\n  \"ghost\": \"Bu\"\n}\n")?;

    let output = test.run(&["check"])?;

    let out = stdout(&output);
    assert_eq!(out.matches("unused-key").count(), 3, "{out}");
    assert!(out.contains("en.arb:2:3"), "{out}");
    assert!(out.contains("nl.arb:2:3"), "{out}");
    assert!(out.contains("sv.arb:2:3"), "{out}");
    Ok(())
}

#[test]
fn test_added_key_with_no_usage_is_detected_per_language() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        r#"{"@_GREETINGS": {}, "hello": "Hi"}"#,
    )?;
    test.write_file("lib/l10n/nl.arb", r#"{"@_GREETINGS": {}, "hello": "Hoi"}"#)?;
    test.write_file("lib/page.dart", "Text(l10n.hello);\n")?;

    let output = test.run(&[
        "add",
        "--folder",
        "lib/l10n",
        "--section",
        "GREETINGS",
        "--key",
        "orphanKey",
        "--value",
        "en=Never shown",
        "--value",
        "nl=Nooit getoond",
    ])?;
    assert_eq!(output.status.code(), Some(0));

    let output = test.run(&["check"])?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    // Exactly one finding per language file defining the new key.
    assert_eq!(out.matches("unused-key").count(), 2, "{out}");
    assert!(out.contains("en.arb:"), "{out}");
    assert!(out.contains("nl.arb:"), "{out}");
    Ok(())
}

#[test]
fn test_scope_isolation() -> Result<()> {
    // Group A only accepts references from moduleA; the reference living
    // in moduleB does not count for it, but does for unrestricted group B.
    let test = CliTest::with_file("lib/moduleA/l10n/en.arb", "{\n  \"shared\": \"A\"\n}\n")?;
    test.write_file("lib/moduleA/l10n/scope.yaml", "scope:\n  - moduleA\n")?;
    test.write_file("lib/common/l10n/en.arb", "{\n  \"shared\": \"B\"\n}\n")?;
    test.write_file("lib/moduleB/page.dart", "Text(l10n.shared);\n")?;

    let output = test.run(&["check"])?;

    let out = stdout(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(out.matches("unused-key").count(), 1, "{out}");
    assert!(out.contains("moduleA"), "{out}");
    assert!(!out.contains("common/l10n"), "{out}");
    Ok(())
}

#[test]
fn test_malformed_resource_is_warning_not_fatal() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", "{\n  \"hello\": \"Hi\"\n}\n")?;
    test.write_file("lib/l10n/broken.arb", "{ not json }\n")?;
    test.write_file("lib/page.dart", "Text(l10n.hello);\n")?;

    let output = test.run(&["check"])?;

    // Parse warnings alone do not fail the check.
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("parse-error"));
    Ok(())
}

#[test]
fn test_malformed_scope_is_warning_and_unrestricted() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", "{\n  \"hello\": \"Hi\"\n}\n")?;
    test.write_file("lib/l10n/scope.yaml", "scope: [unclosed\n")?;
    test.write_file("lib/page.dart", "Text(l10n.hello);\n")?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("scope-config"));
    Ok(())
}

#[test]
fn test_config_ignores_source_directory() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", "{\n  \"hello\": \"Hi\"\n}\n")?;
    // The only reference lives in an ignored directory.
    test.write_file("lib/generated/l10n.dart", "Text(l10n.hello);\n")?;
    test.write_file(
        ".arbrc.json",
        r#"{ "ignores": ["lib/generated"] }"#,
    )?;

    let output = test.run(&["check"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("unused-key"));
    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["--help"])?;

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    for command in ["check", "add", "remove", "sort", "search", "init"] {
        assert!(out.contains(command), "{out}");
    }
    Ok(())
}

#[test]
fn test_init_writes_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.run(&["init"])?;

    assert_eq!(output.status.code(), Some(0));
    let config = test.read_file(".arbrc.json")?;
    assert!(config.contains("includes"));

    // A second init refuses to overwrite.
    let output = test.run(&["init"])?;
    assert_eq!(output.status.code(), Some(2));
    Ok(())
}
