//! Analysis engine.
//!
//! - `parsers`: TypeScript/TSX parsing and translation bundle loading
//! - `extract`: translation call sites and key classification
//! - `collect`: suppression directives from comments
//! - `resolve`: dotted-path evaluation against a bundle
//! - `audit`: the auditor driving all of the above over a set of files
//! - `file_scanner`: expansion of input arguments into source files

pub mod audit;
pub mod collect;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod resolve;

pub use audit::{AuditReport, Auditor, KeyUsage};
pub use data::{LookupKey, SourceContext, SourceLocation};
