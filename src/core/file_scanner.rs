//! Expansion of CLI input arguments into the list of files to audit.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Directories never descended into when an input names a directory.
const SKIPPED_DIRS: &[&str] = &["node_modules", ".git"];

/// A file to audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    /// Path as shown in reports, relative to the root.
    pub display_path: String,
    /// Path used to read the file.
    pub path: PathBuf,
}

/// Expand input paths (relative to `root`) into the files to audit.
///
/// A file input is kept as given, whatever its extension, so that the
/// auditor can report unsupported files. A directory input is walked in
/// sorted order and contributes its `.ts`/`.tsx` files. Inputs matching an
/// ignore pattern are dropped, and each file appears at most once, in the
/// order it was first reached.
pub fn expand_inputs(root: &Path, inputs: &[String], ignores: &[Pattern]) -> Vec<SourceInput> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut files = Vec::new();

    let mut push = |input: SourceInput| {
        if ignores.iter().any(|p| p.matches(&input.display_path)) {
            debug!("ignoring {}", input.display_path);
            return;
        }
        if seen.insert(input.display_path.clone()) {
            files.push(input);
        }
    };

    for input in inputs {
        let path = root.join(input);
        if !path.is_dir() {
            push(SourceInput {
                display_path: input.clone(),
                path,
            });
            continue;
        }

        let walker = WalkDir::new(&path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                !(e.file_type().is_dir()
                    && SKIPPED_DIRS.contains(&e.file_name().to_string_lossy().as_ref()))
            });

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    warn!("cannot access path: {e}");
                    continue;
                }
            };
            if entry.file_type().is_file() && is_source_file(entry.path()) {
                push(SourceInput {
                    display_path: display_path(root, entry.path()),
                    path: entry.into_path(),
                });
            }
        }
    }

    files
}

fn is_source_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("ts" | "tsx")
    )
}

fn display_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
