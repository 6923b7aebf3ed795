use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use crate::{CliTest, setup_messages, stderr, stdout};

#[test]
fn test_resolve_single_locale_to_stdout() -> Result<()> {
    let test = CliTest::new()?;
    setup_messages(&test)?;

    assert_cmd_snapshot!(test.command().args(["resolve", "--locale", "en"]), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    {
      "actionModal": {
        "confirm": "Open Wallet"
      },
      "common": {
        "close": "Close",
        "openWallet": "Open Wallet",
        "price": "$1 fee"
      },
      "walletModal": {
        "buttons": {
          "close": "Close",
          "openWallet": "Open Wallet",
          "price": "$1 fee"
        },
        "closeButton": "Close",
        "title": "Connect your wallet"
      }
    }

    ----- stderr -----
    "###);
    Ok(())
}

#[test]
fn test_resolve_all_locales_to_stdout() -> Result<()> {
    let test = CliTest::new()?;
    setup_messages(&test)?;

    let output = test.run(&["resolve"])?;
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));

    let resolved: Value = serde_json::from_str(&stdout(&output))?;
    assert_eq!(resolved["en"]["actionModal"]["confirm"], json!("Open Wallet"));
    assert_eq!(resolved["ru"]["walletModal"]["closeButton"], json!("Закрыть"));
    assert_eq!(resolved["ru"]["common"]["price"], json!("$1 комиссия"));
    Ok(())
}

#[test]
fn test_resolve_writes_out_dir() -> Result<()> {
    let test = CliTest::new()?;
    setup_messages(&test)?;

    assert_cmd_snapshot!(test.command().args(["resolve", "--out-dir", "dist/i18n"]), @r###"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Resolved 2 locales into dist/i18n

    ----- stderr -----
    "###);

    let en: Value = serde_json::from_str(&test.read_file("dist/i18n/en.json")?)?;
    assert_eq!(en["walletModal"]["closeButton"], json!("Close"));
    assert!(test.root().join("dist/i18n/ru.json").exists());
    Ok(())
}

#[test]
fn test_resolve_fails_on_missing_reference() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/en.json", r#"{"banner": "$missing.key"}"#)?;

    assert_cmd_snapshot!(test.command().arg("resolve"), @r###"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: failed to resolve locale 'en': Cannot parse translations: there is no property missing in translation (key `banner` references `$missing.key`)
    "###);
    Ok(())
}

#[test]
fn test_resolve_fails_on_unparseable_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_messages(&test)?;
    test.write_file("messages/de.json", "{ not json")?;

    let output = test.run(&["resolve"])?;

    // The parser's own message varies between serde_json versions.
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("de.json"));
    Ok(())
}

#[test]
fn test_resolve_unknown_locale() -> Result<()> {
    let test = CliTest::new()?;
    setup_messages(&test)?;

    assert_cmd_snapshot!(test.command().args(["resolve", "--locale", "ja"]), @r###"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: Locale 'ja' not found in './messages'
    "###);
    Ok(())
}
