use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stdout};

#[test]
fn test_sort_orders_sections_and_keys() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        r#"{"loose": "L", "@_ZULU": {}, "zebra": "Z", "apple": "A", "@_ALPHA": {}, "mango": "M"}"#,
    )?;

    let output = test.run(&["sort", "--folder", "lib/l10n"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Sorted 1 file(s)."));
    assert_eq!(
        test.read_file("lib/l10n/en.arb")?,
        "{\n  \"loose\": \"L\",\n  \"@_ALPHA\": {},\n  \"mango\": \"M\",\n\n  \"@_ZULU\": {},\n  \"apple\": \"A\",\n  \"zebra\": \"Z\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_sort_is_idempotent() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        r#"{"b": "B", "@b": {"description": "x"}, "a": "A", "@_S": {}, "z": "Z"}"#,
    )?;

    let output = test.run(&["sort", "--folder", "lib/l10n"])?;
    assert_eq!(output.status.code(), Some(0));
    let once = test.read_file("lib/l10n/en.arb")?;

    let output = test.run(&["sort", "--folder", "lib/l10n"])?;
    assert_eq!(output.status.code(), Some(0));
    let twice = test.read_file("lib/l10n/en.arb")?;

    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn test_sort_keeps_metadata_with_owner() -> Result<()> {
    let test = CliTest::with_file(
        "lib/l10n/en.arb",
        r#"{"b": "B", "a": "A", "@a": {"description": "x"}}"#,
    )?;

    let output = test.run(&["sort", "--folder", "lib/l10n"])?;

    assert_eq!(output.status.code(), Some(0));
    // "@a" would sort after "b" alphabetically but must stay glued to "a".
    assert_eq!(
        test.read_file("lib/l10n/en.arb")?,
        "{\n  \"a\": \"A\",\n  \"@a\": {\n    \"description\": \"x\"\n  },\n  \"b\": \"B\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_sort_all_languages_in_folder() -> Result<()> {
    let test = CliTest::with_file("lib/l10n/en.arb", r#"{"b": "B", "a": "A"}"#)?;
    test.write_file("lib/l10n/nl.arb", r#"{"b": "Bee", "a": "Aa"}"#)?;

    let output = test.run(&["sort", "--folder", "lib/l10n"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Sorted 2 file(s)."));
    assert_eq!(
        test.read_file("lib/l10n/nl.arb")?,
        "{\n  \"a\": \"Aa\",\n  \"b\": \"Bee\"\n}\n"
    );
    Ok(())
}
