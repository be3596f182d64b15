//! CLI argument definitions using clap.
//!
//! ```text
//! i18n-audit [OPTIONS] [FILES]...
//! ```
//!
//! Every `FILES` argument may itself hold several whitespace-separated
//! paths, so a file list produced by another tool can be passed as one
//! quoted argument.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::config::Config;
use crate::core::resolve::BrokenWhen;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Source files or directories to audit, relative to the root
    pub files: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl Arguments {
    /// Input paths with every argument split on whitespace.
    pub fn input_paths(&self) -> Vec<String> {
        self.files
            .iter()
            .flat_map(|arg| arg.split_whitespace())
            .map(str::to_string)
            .collect()
    }
}

/// Options shared by every run, overriding the config file.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Repository root (default: current directory)
    #[arg(long, env = "I18N_AUDIT_ROOT")]
    pub root: Option<PathBuf>,

    /// Bundle root directory relative to the root (overrides config file)
    #[arg(long)]
    pub bundle_root: Option<String>,

    /// Canonical locale whose bundles are checked (overrides config file)
    #[arg(long)]
    pub locale: Option<String>,

    /// Translation function name, may be repeated (overrides config file)
    #[arg(long = "function", value_name = "NAME")]
    pub functions: Vec<String>,

    /// When a resolved value counts as broken (overrides config file)
    #[arg(long, value_enum)]
    pub broken_when: Option<BrokenWhen>,

    /// Do not print the key found at each call site
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Apply CLI overrides (CLI > config file > defaults).
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref bundle_root) = self.bundle_root {
            config.bundle_root = bundle_root.clone();
        }
        if let Some(ref locale) = self.locale {
            config.canonical_locale = locale.clone();
        }
        if !self.functions.is_empty() {
            config.translation_functions = self.functions.clone();
        }
        if let Some(broken_when) = self.broken_when {
            config.broken_when = broken_when;
        }
    }
}
