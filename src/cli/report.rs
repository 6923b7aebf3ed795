//! Report formatting and printing utilities.
//!
//! Issues are printed cargo-style. Kept out of the library modules so the
//! resolver can be used without any terminal output.

use std::io::{self, Write};

use colored::Colorize;

use crate::{
    dictionary::ResolveError,
    issues::ReferenceIssue,
    parsers::json::{MessageScanWarning, ScanWarningKind},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues to stdout, followed by a summary line.
pub fn report(issues: &[ReferenceIssue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
pub fn report_to<W: Write>(issues: &[ReferenceIssue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(ReferenceIssue::report_order);

    for issue in &sorted {
        print_issue(issue, writer);
    }

    let _ = writeln!(
        writer,
        "{} {}",
        FAILURE_MARK.red(),
        format!(
            "{} {} found",
            sorted.len(),
            if sorted.len() == 1 { "problem" } else { "problems" }
        )
        .red()
        .bold()
    );
}

/// Print a success message when no issues are found.
pub fn print_success(locale_files: usize) {
    print_success_to(locale_files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(locale_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} locale {} - no issues found",
            locale_files,
            if locale_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print scan warnings to stderr.
///
/// Parse failures are summarized unless `verbose` is set; unknown locales are
/// only shown in verbose mode.
pub fn print_scan_warnings(warnings: &[MessageScanWarning], verbose: bool) {
    print_scan_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

pub fn print_scan_warnings_to<W: Write>(
    warnings: &[MessageScanWarning],
    verbose: bool,
    writer: &mut W,
) {
    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
        return;
    }

    let parse_errors = warnings
        .iter()
        .filter(|w| w.kind == ScanWarningKind::ParseError)
        .count();
    if parse_errors > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            parse_errors,
            "-v".cyan()
        );
    }
}

fn print_issue<W: Write>(issue: &ReferenceIssue, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        "error".bold().red(),
        issue.key(),
        issue.rule().dimmed()
    );
    let _ = writeln!(
        writer,
        "  {} {} ({})",
        "-->".blue().bold(),
        issue.file_path,
        issue.locale
    );

    let detail = match &issue.error {
        ResolveError::UnresolvedReference {
            reference, segment, ..
        } => format!(
            "{} has no property \"{}\"",
            reference.cyan(),
            segment
        ),
        ResolveError::CircularReference { chain, .. } => {
            format!("cycle: {}", chain.join(" -> ").cyan())
        }
    };
    let _ = writeln!(writer, "   {} {}", "=".blue().bold(), detail);
    let _ = writeln!(writer);
}
