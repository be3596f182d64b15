//! Type definitions for suppression comments.

use std::collections::{HashMap, HashSet};

/// Rules that can be suppressed via i18n-audit comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuppressibleRule {
    BrokenKey,
    ManualReview,
}

/// Range representing disabled lines [start, end] inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisabledRange {
    pub start: usize,
    pub end: usize, // usize::MAX for open-ended
}

/// Tracks suppressed lines per rule for a single file.
#[derive(Debug, Default)]
pub struct Suppressions {
    /// Single-line suppressions: rule -> set of line numbers
    pub disabled_lines: HashMap<SuppressibleRule, HashSet<usize>>,
    /// Range-based suppressions: rule -> list of ranges
    pub disabled_ranges: HashMap<SuppressibleRule, Vec<DisabledRange>>,
}
