use anyhow::Result;

use super::{super::args::CheckCommand, super::exit_status::ExitStatus, CommandContext};
use crate::{
    cli::report::{print_success, report},
    dictionary::check as check_references,
    issues::ReferenceIssue,
};

pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let scan = ctx.scan()?;

    let mut issues = Vec::new();
    for (locale, tree) in scan.dictionary.iter() {
        let file_path = scan
            .files
            .get(locale)
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        issues.extend(
            check_references(tree)
                .into_iter()
                .map(|error| ReferenceIssue::new(locale, file_path.clone(), error)),
        );
    }

    let parse_errors = scan.parse_errors().count();
    if issues.is_empty() && parse_errors == 0 {
        print_success(scan.files.len());
        return Ok(ExitStatus::Success);
    }

    report(&issues);
    Ok(ExitStatus::Failure)
}
