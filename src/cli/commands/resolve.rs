use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::{Map, Value};

use super::{super::args::ResolveCommand, super::exit_status::ExitStatus, CommandContext};
use crate::{cli::report::SUCCESS_MARK, dictionary::Dictionary};

pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let mut dictionary = ctx.load_dictionary()?;

    if let Some(locale) = &cmd.locale {
        let tree = dictionary.get(locale).cloned().with_context(|| {
            format!(
                "Locale '{}' not found in '{}'",
                locale,
                ctx.messages_root.display()
            )
        })?;
        dictionary = Dictionary::from_iter([(locale.clone(), tree)]);
    }

    let translations = dictionary.resolve()?;

    if let Some(out_dir) = &cmd.out_dir {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create directory: {}", out_dir.display()))?;

        let mut written = 0;
        for (locale, tree) in translations.iter() {
            let path = out_dir.join(format!("{}.json", locale));
            let mut json = serde_json::to_string_pretty(tree)?;
            json.push('\n');
            fs::write(&path, json)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            if ctx.verbose {
                eprintln!("{} {}", "wrote".green(), path.display());
            }
            written += 1;
        }

        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Resolved {} {} into {}",
                written,
                if written == 1 { "locale" } else { "locales" },
                out_dir.display()
            )
            .green()
        );
        return Ok(ExitStatus::Success);
    }

    let output = match &cmd.locale {
        Some(locale) => serde_json::to_value(translations.locale(locale))?,
        None => {
            let mut map = Map::new();
            for (locale, tree) in translations.iter() {
                map.insert(locale.to_string(), serde_json::to_value(tree)?);
            }
            Value::Object(map)
        }
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(ExitStatus::Success)
}
