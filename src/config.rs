use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::resolve::BrokenWhen;

pub const CONFIG_FILE_NAME: &str = ".i18nauditrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one bundle directory per locale, relative to the root.
    #[serde(default = "default_bundle_root")]
    pub bundle_root: String,
    #[serde(default = "default_canonical_locale")]
    pub canonical_locale: String,
    /// Callee names treated as translation lookups (`t`, `i18n.t`, ...).
    #[serde(default = "default_translation_functions")]
    pub translation_functions: Vec<String>,
    /// Namespace for keys written without a `namespace:` prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,
    #[serde(default)]
    pub broken_when: BrokenWhen,
    /// Glob patterns of input files to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_bundle_root() -> String {
    "modules/i18n/dist/bundle".to_string()
}

fn default_canonical_locale() -> String {
    "en-US".to_string()
}

fn default_translation_functions() -> Vec<String> {
    vec!["t".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bundle_root: default_bundle_root(),
            canonical_locale: default_canonical_locale(),
            translation_functions: default_translation_functions(),
            default_namespace: None,
            broken_when: BrokenWhen::default(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values and compile the `ignores` globs.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or no
    /// translation function is configured.
    pub fn validate(&self) -> Result<Vec<Pattern>> {
        if self.translation_functions.is_empty() {
            bail!("'translationFunctions' must name at least one function");
        }

        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
