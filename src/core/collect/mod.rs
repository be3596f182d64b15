//! Collection of per-file comment directives.
//!
//! Suppression directives are collected from the comments of each parsed file
//! and consulted by the auditor before an issue is recorded.

pub mod comments;
pub mod types;

pub use comments::collector::CommentCollector;
pub use comments::directive::Directive;
pub use types::*;
