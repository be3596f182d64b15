//! i18n-audit - broken translation key checker for TypeScript projects
//!
//! i18n-audit is a CLI tool and library that scans TypeScript/TSX sources for
//! translation lookups such as `t("common:buttons.save")`, resolves every key
//! against the canonical-language JSON bundle of its namespace, and reports keys
//! that do not resolve as well as lookups whose key cannot be determined statically.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Analysis engine (parsing, extraction, bundle resolution, auditing)
//! - `issues`: Issue type definitions and reporting

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
