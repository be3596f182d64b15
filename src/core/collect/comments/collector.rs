//! Suppression collector.
//!
//! Turns the comments of a parsed file into per-rule `Suppressions`.
//!
//! # Consecutive Comment Handling
//!
//! A `i18n-audit-disable-next-line` directive applies to the next line that is
//! not itself a comment, so several stacked comments still reach the code:
//!
//! ```tsx
//! // i18n-audit-disable-next-line manual-review
//! // eslint-disable-next-line
//! t(keyFromProps); // <- directive applies here
//! ```
//!
//! A blank line breaks the chain.

use std::collections::{HashMap, HashSet};

use crate::core::collect::comments::directive::Directive;
use crate::core::collect::types::{DisabledRange, SuppressibleRule, Suppressions};
use crate::core::parsers::SourceComment;

/// Maximum number of consecutive comment lines to traverse when looking for
/// the target code line.
pub const MAX_COMMENT_CHAIN_LINES: usize = 10;

/// Collects suppression directives from a file.
pub struct CommentCollector;

impl CommentCollector {
    /// Collect suppressions from comments sorted by line.
    pub fn collect(comments: &[SourceComment]) -> Suppressions {
        let mut suppressions = Suppressions::default();

        let comment_lines: HashSet<usize> = comments.iter().map(|c| c.line).collect();

        // Track open disable ranges per rule
        let mut open_ranges: HashMap<SuppressibleRule, usize> = HashMap::new();

        for comment in comments {
            let Some(directive) = Directive::parse(&comment.text) else {
                continue;
            };
            let line = comment.line;

            match directive {
                Directive::Disable { rules } => {
                    for rule in rules {
                        open_ranges.entry(rule).or_insert(line);
                    }
                }
                Directive::Enable { rules } => {
                    for rule in rules {
                        if let Some(start) = open_ranges.remove(&rule) {
                            suppressions
                                .disabled_ranges
                                .entry(rule)
                                .or_default()
                                .push(DisabledRange {
                                    start,
                                    end: line.saturating_sub(1),
                                });
                        }
                    }
                }
                Directive::DisableNextLine { rules } => {
                    let target_line = Self::find_next_non_comment_line(line, &comment_lines);
                    for rule in rules {
                        suppressions
                            .disabled_lines
                            .entry(rule)
                            .or_default()
                            .insert(target_line);
                    }
                }
            }
        }

        // Unclosed ranges extend to end of file
        for (rule, start) in open_ranges {
            suppressions
                .disabled_ranges
                .entry(rule)
                .or_default()
                .push(DisabledRange {
                    start,
                    end: usize::MAX,
                });
        }

        suppressions
    }

    fn find_next_non_comment_line(line: usize, comment_lines: &HashSet<usize>) -> usize {
        let mut next = line + 1;
        let max_line = line + MAX_COMMENT_CHAIN_LINES;
        while comment_lines.contains(&next) && next < max_line {
            next += 1;
        }
        next
    }
}
