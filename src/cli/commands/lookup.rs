use anyhow::Result;
use colored::Colorize;

use super::{super::args::LookupCommand, super::exit_status::ExitStatus, CommandContext};
use crate::dictionary::{Node, install};

pub fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let translations = install(ctx.load_dictionary()?.resolve()?)?;

    let primary = ctx.config.primary_locale.as_str();
    let locale = cmd.locale.as_deref().unwrap_or(primary);

    if ctx.verbose && locale != primary && translations.lookup(locale, &cmd.key).is_none() {
        eprintln!(
            "{} \"{}\" is missing in '{}', falling back to '{}'",
            "note:".bold().cyan(),
            cmd.key,
            locale,
            primary
        );
    }

    match translations.translate(locale, &cmd.key, primary) {
        Some(Node::Leaf(text)) => println!("{}", text),
        Some(node @ Node::Subtree(_)) => println!("{}", serde_json::to_string_pretty(node)?),
        None => {
            let searched = if locale == primary {
                format!("'{}'", locale)
            } else {
                format!("'{}' or '{}'", locale, primary)
            };
            eprintln!(
                "{} key \"{}\" not found in {}",
                "error:".bold().red(),
                cmd.key,
                searched
            );
            return Ok(ExitStatus::Failure);
        }
    }

    Ok(ExitStatus::Success)
}
