//! Translation call sites collected during AST traversal.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::SourceContext;

static WHITESPACE_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Classified first argument of a translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyExpr {
    /// Key text determined from a string literal or a literal concatenation.
    Static(String),
    /// Any other argument shape. Holds the argument's source text.
    Dynamic(String),
}

/// One translation call found in a source file.
///
/// Each call site is consumed right away by the auditor: a static key is
/// resolved against its bundle, a dynamic one becomes a manual review issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub context: SourceContext,
    /// Callee text, e.g. `t` or `i18n.t`.
    pub callee: String,
    pub key: KeyExpr,
}

/// Key text of a binary (concatenation) argument.
///
/// Strips every `"` and `+` and every newline, removes all whitespace runs,
/// then trims, so `"ns:" + "a.b"` yields `ns:a.b`.
pub fn concatenation_key(source: &str) -> String {
    let stripped: String = source
        .chars()
        .filter(|c| !matches!(c, '"' | '+' | '\n'))
        .collect();
    WHITESPACE_RUN_REGEX
        .replace_all(&stripped, "")
        .trim()
        .to_string()
}

/// Key text of a string literal argument: the raw source text without its
/// surrounding quote characters. Escape sequences are kept verbatim.
pub fn literal_key(source: &str) -> String {
    let mut chars = source.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}
