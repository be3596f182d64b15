use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors raised while loading a namespace bundle.
///
/// These are logged and turned into "no bundle" by [`BundleResolver::resolve`];
/// every key of the namespace is then reported as broken.
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("no bundle file for namespace '{namespace}' in {}", dir.display())]
    NamespaceNotFound { namespace: String, dir: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads canonical-language translation bundles, one JSON file per namespace.
///
/// The bundle for namespace `common` is the file in `bundle_dir` whose name
/// starts with `common.` and ends with `.json` (e.g. `common.3fa9c1.json`).
/// Every namespace is read from disk at most once; failed loads are cached as
/// well so a missing namespace is only reported once per run.
#[derive(Debug)]
pub struct BundleResolver {
    bundle_dir: PathBuf,
    cache: HashMap<String, Option<Value>>,
    loads: usize,
}

impl BundleResolver {
    pub fn new(bundle_dir: impl Into<PathBuf>) -> Self {
        Self {
            bundle_dir: bundle_dir.into(),
            cache: HashMap::new(),
            loads: 0,
        }
    }

    pub fn bundle_dir(&self) -> &Path {
        &self.bundle_dir
    }

    /// Number of namespaces read from disk so far.
    pub fn loads(&self) -> usize {
        self.loads
    }

    /// Get the bundle for a namespace, loading it on first use.
    ///
    /// Returns `None` when the namespace has no usable bundle.
    pub async fn resolve(&mut self, namespace: &str) -> Option<&Value> {
        if self.cache.contains_key(namespace) {
            debug!(namespace, "bundle cache hit");
        } else {
            let bundle = self.load(namespace).await;
            self.cache.insert(namespace.to_string(), bundle);
        }
        self.cache.get(namespace).and_then(Option::as_ref)
    }

    async fn load(&mut self, namespace: &str) -> Option<Value> {
        self.loads += 1;
        match self.read_bundle(namespace).await {
            Ok(bundle) => Some(bundle),
            Err(err) => {
                error!("{err}");
                None
            }
        }
    }

    async fn read_bundle(&self, namespace: &str) -> Result<Value, BundleError> {
        let path = self.find_bundle_file(namespace).await?;
        debug!(namespace, path = %path.display(), "loading bundle");

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| BundleError::Io {
                path: path.clone(),
                source,
            })?;
        let json: Value = serde_json::from_str(&content)
            .map_err(|source| BundleError::Parse { path, source })?;

        Ok(unwrap_default_export(json))
    }

    async fn find_bundle_file(&self, namespace: &str) -> Result<PathBuf, BundleError> {
        let prefix = format!("{}.", namespace);
        let not_found = || BundleError::NamespaceNotFound {
            namespace: namespace.to_string(),
            dir: self.bundle_dir.clone(),
        };
        let io_error = |source| BundleError::Io {
            path: self.bundle_dir.clone(),
            source,
        };

        let mut entries = match tokio::fs::read_dir(&self.bundle_dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
            Err(err) => return Err(io_error(err)),
        };

        let mut candidates = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if name.starts_with(&prefix) && name.ends_with(".json") {
                candidates.push(entry.path());
            }
        }
        candidates.sort();

        if candidates.len() > 1 {
            warn!(
                namespace,
                path = %candidates[0].display(),
                "several bundle files match namespace, using the first"
            );
        }
        candidates.into_iter().next().ok_or_else(not_found)
    }
}

/// Unwrap a module-shaped `{"default": {...}}` bundle.
///
/// Only a document whose sole key is `default` holding an object is
/// unwrapped; a regular bundle may still define a `default` key of its own.
pub fn unwrap_default_export(json: Value) -> Value {
    match json {
        Value::Object(map)
            if map.len() == 1 && map.get("default").is_some_and(Value::is_object) =>
        {
            map.into_iter()
                .next()
                .map(|(_, bundle)| bundle)
                .unwrap_or_default()
        }
        other => other,
    }
}
