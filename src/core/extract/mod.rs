//! Extraction: collecting translation call sites from a parsed file.
//!
//! The extractor walks the AST once and yields a `CallSite` for every call to
//! a configured translation function. The key argument is classified right
//! away: string literals and literal concatenations give a static key, every
//! other shape is dynamic and needs manual review.

pub mod call_site;
pub mod extractor;

pub use call_site::{CallSite, KeyExpr, concatenation_key, literal_key};
pub use extractor::CallSiteExtractor;
