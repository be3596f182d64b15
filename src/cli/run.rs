//! Runs one audit: resolves the root, loads the configuration, applies CLI
//! overrides and drives the auditor on a current-thread tokio runtime.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, load_config};
use crate::core::{AuditReport, Auditor};

pub fn run(common: &CommonArgs, inputs: &[String]) -> Result<AuditReport> {
    // Priority: CLI --root arg > current directory
    let root = common.root.clone().unwrap_or_else(|| PathBuf::from("."));
    if !root.is_dir() {
        anyhow::bail!("Root directory does not exist: {:?}", root);
    }

    let config_result = load_config(&root)?;
    if !config_result.from_file {
        info!("no {CONFIG_FILE_NAME} found, using default configuration");
    }

    let mut config = config_result.config;
    common.apply_to(&mut config);
    let ignores = config.validate()?;

    let mut auditor = Auditor::new(&root, &config, ignores);
    debug!(bundle_dir = %auditor.bundle_dir().display(), "auditing {} input(s)", inputs.len());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let report = runtime.block_on(auditor.run(inputs));

    debug!(
        files = report.files_checked,
        call_sites = report.call_sites,
        bundles = report.bundles_loaded,
        "audit finished"
    );
    Ok(report)
}
