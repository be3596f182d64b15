//! i18n-audit directive parsing.
//!
//! Suppression directives:
//! - `i18n-audit-disable [rules]` / `i18n-audit-enable [rules]` - range
//! - `i18n-audit-disable-next-line [rules]` - single line

use std::collections::HashSet;

use super::super::types::SuppressibleRule;

/// i18n-audit comment directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Disable { rules: HashSet<SuppressibleRule> },
    Enable { rules: HashSet<SuppressibleRule> },
    DisableNextLine { rules: HashSet<SuppressibleRule> },
}

impl Directive {
    /// Parse directive from comment text (swc has already stripped `//` and `/* */`).
    ///
    /// Returns `None` if the comment is not an i18n-audit directive.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        // Longer prefix first
        if let Some(rest) = strip_directive_prefix(text, "i18n-audit-disable-next-line") {
            return Some(Self::DisableNextLine {
                rules: parse_rules(rest),
            });
        }
        if let Some(rest) = strip_directive_prefix(text, "i18n-audit-disable") {
            return Some(Self::Disable {
                rules: parse_rules(rest),
            });
        }
        if let Some(rest) = strip_directive_prefix(text, "i18n-audit-enable") {
            return Some(Self::Enable {
                rules: parse_rules(rest),
            });
        }

        None
    }
}

/// Try to match directive prefix, requiring whitespace or end after it
fn strip_directive_prefix<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.strip_prefix(prefix)
        .filter(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

/// Parse suppression rule list.
///
/// An empty list, or a list without a single known rule, means all rules.
fn parse_rules(rest: &str) -> HashSet<SuppressibleRule> {
    let parsed: HashSet<_> = rest
        .split_whitespace()
        .filter_map(SuppressibleRule::parse)
        .collect();

    if parsed.is_empty() {
        SuppressibleRule::all()
    } else {
        parsed
    }
}
