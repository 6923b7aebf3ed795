use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, setup_messages};

#[test]
fn test_check_passes_on_valid_messages() -> Result<()> {
    let test = CliTest::new()?;
    setup_messages(&test)?;

    assert_cmd_snapshot!(test.command().arg("check"), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 locale files - no issues found

    ----- stderr -----
    "###);
    Ok(())
}

#[test]
fn test_check_reports_unresolved_reference() -> Result<()> {
    let test = CliTest::new()?;
    setup_messages(&test)?;
    test.write_file(
        "messages/de.json",
        r#"{"walletModal": {"closeButton": "$common.close"}}"#,
    )?;

    assert_cmd_snapshot!(test.command().arg("check"), @r###"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "walletModal.closeButton"  unresolved-reference
      --> ./messages/de.json (de)
       = $common.close has no property "common"

    ✘ 1 problem found

    ----- stderr -----
    "###);
    Ok(())
}

#[test]
fn test_check_reports_circular_reference() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"a": "$b", "b": "$a"}"#)?;

    assert_cmd_snapshot!(test.command().arg("check"), @r###"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "a"  circular-reference
      --> ./messages/en.json (en)
       = cycle: $b -> $a -> $b

    error: "b"  circular-reference
      --> ./messages/en.json (en)
       = cycle: $a -> $b -> $a

    ✘ 2 problems found

    ----- stderr -----
    "###);
    Ok(())
}

#[test]
fn test_check_accepts_alias_used_inside_its_target() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "messages/en.json",
        r#"{"a": "$b", "b": {"x": "X", "y": "$a.x"}}"#,
    )?;

    assert_cmd_snapshot!(test.command().arg("check"), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 locale file - no issues found

    ----- stderr -----
    "###);
    Ok(())
}

#[test]
fn test_check_fails_on_unparseable_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_messages(&test)?;
    test.write_file("messages/fr.json", r#"{"count": 3}"#)?;

    assert_cmd_snapshot!(test.command().arg("check"), @r###"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    warning: 1 file(s) could not be parsed (use -v for details)
    "###);
    Ok(())
}

#[test]
fn test_check_missing_messages_dir() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("check"), @r###"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Messages directory './messages' does not exist.
    Hint: Check your .dictrefrc.json 'messagesRoot' setting.
    "###);
    Ok(())
}

#[test]
fn test_check_uses_messages_root_from_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dictrefrc.json", r#"{ "messagesRoot": "./i18n" }"#)?;
    test.write_file("i18n/en.json", r#"{"a": "A", "b": "$a"}"#)?;

    assert_cmd_snapshot!(test.command().arg("check"), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 locale file - no issues found

    ----- stderr -----
    "###);
    Ok(())
}
