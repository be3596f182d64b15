//! File parsers for source code and translation bundles.
//!
//! This module provides parsers for different file types:
//! - `bundle`: Canonical-language JSON bundles, resolved by namespace and cached per run
//! - `source`: TS/TSX source file parser (uses swc for AST generation)

pub mod bundle;
pub mod source;

pub use bundle::{BundleError, BundleResolver};
pub use source::{ParsedSource, SourceComment, SourceError, SourceKind, parse_source};
