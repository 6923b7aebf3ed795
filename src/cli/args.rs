//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Validate every `$reference` in every locale file
//! - `resolve`: Print or write the resolved dictionaries
//! - `lookup`: Print the resolved value of a single key
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Primary locale, used as lookup fallback (overrides config file)
    #[arg(long)]
    pub primary_locale: Option<String>,

    /// Messages directory path (overrides config file)
    #[arg(long, env = "DICTREF_MESSAGES_ROOT")]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ResolveCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Resolve only this locale (default: all locales)
    #[arg(long)]
    pub locale: Option<String>,

    /// Write `<locale>.json` files into this directory instead of printing
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Dotted key to look up, e.g. `common.close`
    pub key: String,

    /// Locale to look up (default: primary locale)
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check locale files for unresolvable or circular references
    Check(CheckCommand),
    /// Resolve references and print (or write) the resulting dictionaries
    Resolve(ResolveCommand),
    /// Print the resolved value of a key, falling back to the primary locale
    Lookup(LookupCommand),
    /// Initialize a new .dictrefrc.json configuration file
    Init,
}
