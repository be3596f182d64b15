//! Issue types for audit results.
//!
//! Each issue is self-contained with all information the reporter needs to
//! display it: location, message, rule and optional note/hint.

use enum_dispatch::enum_dispatch;

use crate::core::SourceContext;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
///
/// Only errors affect the exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    BrokenKey,
    ManualReview,
    ParseError,
    UnsupportedFile,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::BrokenKey => write!(f, "broken-key"),
            Rule::ManualReview => write!(f, "manual-review"),
            Rule::ParseError => write!(f, "parse-error"),
            Rule::UnsupportedFile => write!(f, "unsupported-file"),
        }
    }
}

// ============================================================
// Broken Key Reason
// ============================================================

/// Why a static key did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrokenKeyReason {
    /// The key has no `namespace:` prefix and no default namespace is configured.
    NoNamespace,
    /// No usable bundle exists for the namespace.
    NamespaceNotFound { namespace: String },
    /// The bundle exists but the path does not lead to a value.
    MissingPath { namespace: String },
    /// The path leads to a value that counts as empty (`""`, `0`, `false`, `null`).
    EmptyValue { namespace: String },
}

impl std::fmt::Display for BrokenKeyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrokenKeyReason::NoNamespace => write!(f, "key has no namespace"),
            BrokenKeyReason::NamespaceNotFound { namespace } => {
                write!(f, "no bundle found for namespace '{}'", namespace)
            }
            BrokenKeyReason::MissingPath { namespace } => {
                write!(f, "path not found in '{}' bundle", namespace)
            }
            BrokenKeyReason::EmptyValue { namespace } => {
                write!(f, "value in '{}' bundle is empty", namespace)
            }
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Translation key that does not resolve in the canonical bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenKeyIssue {
    pub context: SourceContext,
    /// The key text as written in source (e.g. `common:buttons.save`).
    pub key: String,
    pub reason: BrokenKeyReason,
}

impl BrokenKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::BrokenKey
    }
}

/// Translation call whose key cannot be determined statically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualReviewIssue {
    pub context: SourceContext,
    /// Callee text, e.g. `t` or `i18n.t`.
    pub callee: String,
    /// Source text of the key argument.
    pub expression: String,
}

impl ManualReviewIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ManualReview
    }
}

/// File could not be read or parsed and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

/// File is not a `.ts`/`.tsx` source and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedFileIssue {
    pub file_path: String,
    pub error: String,
}

impl UnsupportedFileIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnsupportedFile
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found during an audit.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    BrokenKey(BrokenKeyIssue),
    ManualReview(ManualReviewIssue),
    ParseError(ParseErrorIssue),
    UnsupportedFile(UnsupportedFileIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::BrokenKey(_) => BrokenKeyIssue::severity(),
            Issue::ManualReview(_) => ManualReviewIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
            Issue::UnsupportedFile(_) => UnsupportedFileIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::BrokenKey(_) => BrokenKeyIssue::rule(),
            Issue::ManualReview(_) => ManualReviewIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
            Issue::UnsupportedFile(_) => UnsupportedFileIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// File-level only (no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types; `enum_dispatch` forwards the calls made
/// on `Issue`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key, expression, error).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for BrokenKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        match self.reason {
            BrokenKeyReason::NoNamespace => {
                Some("prefix the key with its namespace, e.g. \"common:key.path\"")
            }
            _ => None,
        }
    }

    fn details(&self) -> Option<String> {
        Some(self.reason.to_string())
    }
}

impl Report for ManualReviewIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.expression.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("key cannot be determined statically, check it manually")
    }

    fn details(&self) -> Option<String> {
        Some(format!("key passed to `{}` is not a string literal", self.callee))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some("file skipped".to_string())
    }
}

impl Report for UnsupportedFileIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
