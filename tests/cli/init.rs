use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .dictrefrc.json

    ----- stderr -----
    "###);

    let config: Value = serde_json::from_str(&test.read_file(".dictrefrc.json")?)?;
    assert_eq!(config["messagesRoot"], "./messages");
    assert_eq!(config["primaryLocale"], "en");
    Ok(())
}

#[test]
fn test_init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dictrefrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r###"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .dictrefrc.json already exists
    "###);

    assert_eq!(test.read_file(".dictrefrc.json")?, "{}");
    Ok(())
}
