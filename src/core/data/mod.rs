//! Core data types shared by the analysis pipeline.
//!
//! ## Module Structure
//!
//! - `key`: Translation key split into namespace and path (LookupKey)
//! - `source`: Source code location types (SourceContext, SourceLocation)

pub mod key;
pub mod source;

pub use key::LookupKey;
pub use source::{SourceContext, SourceLocation};
