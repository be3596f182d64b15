//! Comment collection - suppression directives.
//!
//! - `// i18n-audit-disable-next-line [rule]`: suppress the next code line
//! - `// i18n-audit-disable [rule]` ... `// i18n-audit-enable [rule]`: suppress a range
//!
//! ## Module Structure
//!
//! - `collector`: CommentCollector turning comments into Suppressions
//! - `directive`: Directive parsing
//! - `suppressions`: Suppression lookups by line and rule

pub mod collector;
pub mod directive;
mod suppressions;
