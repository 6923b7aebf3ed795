use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod check;
mod init;
mod resolve;

const BIN_NAME: &str = "dictref";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stop config lookup from escaping the temp project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Result<Output> {
        let output = self.command().args(args).output()?;
        Ok(output)
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// English dictionary in the shape of the wallet modal's message file.
pub const EN_MESSAGES: &str = r#"{
    "common": {
        "close": "Close",
        "openWallet": "Open Wallet",
        "price": "\\$1 fee"
    },
    "walletModal": {
        "title": "Connect your wallet",
        "closeButton": "$common.close",
        "buttons": "$common"
    },
    "actionModal": {
        "confirm": "$walletModal.buttons.openWallet"
    }
}"#;

/// Russian dictionary that omits `walletModal.title`.
pub const RU_MESSAGES: &str = r#"{
    "common": {
        "close": "Закрыть",
        "openWallet": "Открыть кошелёк",
        "price": "\\$1 комиссия"
    },
    "walletModal": {
        "closeButton": "$common.close",
        "buttons": "$common"
    },
    "actionModal": {
        "confirm": "$walletModal.buttons.openWallet"
    }
}"#;

pub fn setup_messages(test: &CliTest) -> Result<()> {
    test.write_file("messages/en.json", EN_MESSAGES)?;
    test.write_file("messages/ru.json", RU_MESSAGES)
}
