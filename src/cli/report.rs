//! Report formatting and printing utilities.
//!
//! Issues are displayed in cargo-style format on stderr: warnings first,
//! then broken keys, then a summary line. The key found at each call site
//! goes to stdout so it can be piped separately.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{AuditReport, KeyUsage};
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a full audit report.
pub fn print(report: &AuditReport, quiet: bool) {
    if !quiet {
        print_usages_to(&report.usages, &mut io::stdout().lock());
    }

    let mut stderr = io::stderr().lock();
    report_to(&report.issues, &mut stderr);
    print_summary_to(report, &mut stderr);
}

/// Print one `path:line  key` line per static key.
pub fn print_usages_to<W: Write>(usages: &[KeyUsage], writer: &mut W) {
    for usage in usages {
        let _ = writeln!(
            writer,
            "{}:{}  {}",
            usage.location.file_path, usage.location.line, usage.key
        );
    }
}

/// Print issues to a custom writer, warnings before errors.
///
/// Within a severity, issues keep the order they were found in.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted: Vec<&Issue> = issues.iter().collect();
    sorted.sort_by_key(|issue| issue.report_severity());

    let max_line_width = calculate_max_line_width(issues);

    for issue in sorted {
        print_issue(issue, writer, max_line_width);
    }
}

/// Print the closing summary line.
pub fn print_summary_to<W: Write>(report: &AuditReport, writer: &mut W) {
    let errors = report.error_count();
    let warnings = report.warning_count();
    let files = report.files_checked;

    if errors > 0 {
        let _ = writeln!(
            writer,
            "{} {} broken {} ({} {})",
            FAILURE_MARK.red(),
            errors,
            if errors == 1 { "key" } else { "keys" },
            warnings,
            if warnings == 1 { "warning" } else { "warnings" }.yellow()
        );
        return;
    }

    let checked = format!(
        "Checked {} source {} - no broken keys found",
        files,
        if files == 1 { "file" } else { "files" }
    );
    if warnings > 0 {
        let _ = writeln!(
            writer,
            "{} {} ({} {})",
            SUCCESS_MARK.green(),
            checked.green(),
            warnings,
            if warnings == 1 { "warning" } else { "warnings" }.yellow()
        );
    } else {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), checked.green());
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity = issue.report_severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };
    let rule = issue.report_rule().to_string().dimmed().cyan();

    match issue.location() {
        ReportLocation::Source(ctx) => {
            let _ = writeln!(
                writer,
                "{}: \"{}\"  {}",
                severity_str,
                issue.message(),
                rule
            );

            // Clickable location: --> path:line:col
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
            print_source_line(
                writer,
                &ctx.source_line,
                ctx.line(),
                ctx.col(),
                severity,
                max_line_width,
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "{}: {}  {}", severity_str, issue.message(), rule);
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_source_line<W: Write>(
    writer: &mut W,
    source_line: &str,
    line: usize,
    col: usize,
    severity: Severity,
    max_line_width: usize,
) {
    let caret_char = match severity {
        Severity::Error => "^".red(),
        Severity::Warning => "^".yellow(),
    };

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        line.to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    // Caret pointing to the column (col is 1-based)
    let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        caret_char,
        width = max_line_width,
        padding = caret_padding
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Source(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
