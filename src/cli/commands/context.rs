use std::{env, path::PathBuf};

use anyhow::{Context, Result, bail};

use super::super::{args::CommonArgs, report::print_scan_warnings};
use crate::{
    config::{Config, ConfigLoadResult, load_config},
    dictionary::Dictionary,
    parsers::json::{ScanMessagesResult, scan_message_files},
};

/// Configuration and paths shared by every command.
#[derive(Debug)]
pub struct CommandContext {
    pub config: Config,
    pub messages_root: PathBuf,
    pub verbose: bool,
}

impl CommandContext {
    /// Load the config file (if any) and apply command-line overrides.
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to get current directory")?;
        let ConfigLoadResult { mut config, .. } = load_config(&cwd)?;

        if let Some(locale) = &common.primary_locale {
            config.primary_locale = locale.clone();
        }
        config.validate()?;

        let messages_root = common
            .messages_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.messages_root));

        Ok(Self {
            config,
            messages_root,
            verbose: common.verbose,
        })
    }

    /// Scan the messages directory and print any warnings.
    pub fn scan(&self) -> Result<ScanMessagesResult> {
        let result = scan_message_files(&self.messages_root, &self.config)?;
        print_scan_warnings(&result.warnings, self.verbose);
        Ok(result)
    }

    /// Load every locale, treating unparseable files as fatal.
    pub fn load_dictionary(&self) -> Result<Dictionary> {
        let scan = self.scan()?;

        if let Some(warning) = scan.parse_errors().next() {
            bail!("{}: {}", warning.file_path, warning.error);
        }
        if scan.dictionary.is_empty() {
            bail!(
                "No message files found in '{}'",
                self.messages_root.display()
            );
        }

        Ok(scan.dictionary)
    }
}
