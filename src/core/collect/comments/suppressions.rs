//! Implementation of suppression-related types and methods.
//!
//! Provides:
//! - `SuppressibleRule` - Rules that can be suppressed
//! - `Suppressions` - Query methods for checking suppression status

use std::collections::HashSet;

use crate::core::collect::types::{SuppressibleRule, Suppressions};

impl SuppressibleRule {
    /// Parse rule name from string (case insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "broken-key" => Some(Self::BrokenKey),
            "manual-review" => Some(Self::ManualReview),
            _ => None,
        }
    }

    /// All available rules (for "no args = all rules" case).
    pub fn all() -> HashSet<Self> {
        [Self::BrokenKey, Self::ManualReview].into_iter().collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BrokenKey => "broken-key",
            Self::ManualReview => "manual-review",
        }
    }
}

impl Suppressions {
    /// Check if a line is suppressed for a specific rule.
    pub fn is_suppressed(&self, line: usize, rule: SuppressibleRule) -> bool {
        if let Some(lines) = self.disabled_lines.get(&rule)
            && lines.contains(&line)
        {
            return true;
        }
        if let Some(ranges) = self.disabled_ranges.get(&rule)
            && ranges.iter().any(|r| line >= r.start && line <= r.end)
        {
            return true;
        }
        false
    }
}
