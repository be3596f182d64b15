//! The auditor: drives parsing, extraction and bundle resolution over a set
//! of input files and collects the resulting issues.
//!
//! Files are audited one after another in input order and call sites in
//! document order, so the issues of an `AuditReport` are already in
//! file-then-line order. A file that cannot be read or parsed is recorded and
//! skipped; it never stops the run.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use glob::Pattern;
use swc_common::SourceMap;
use tracing::debug;

use crate::{
    config::Config,
    core::{
        LookupKey, SourceLocation,
        collect::{CommentCollector, SuppressibleRule, Suppressions},
        extract::{CallSite, CallSiteExtractor, KeyExpr},
        file_scanner::{SourceInput, expand_inputs},
        parsers::{BundleResolver, ParsedSource, SourceError, SourceKind, parse_source},
        resolve::{BrokenWhen, evaluate_path},
    },
    issues::{
        BrokenKeyIssue, BrokenKeyReason, Issue, ManualReviewIssue, ParseErrorIssue, Severity,
        UnsupportedFileIssue,
    },
};

/// A static key found at a call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyUsage {
    pub location: SourceLocation,
    pub key: String,
}

/// Outcome of one audit run.
#[derive(Debug, Default)]
pub struct AuditReport {
    /// Every static key seen, in traversal order.
    pub usages: Vec<KeyUsage>,
    /// Issues in traversal order.
    pub issues: Vec<Issue>,
    /// Number of files parsed successfully.
    pub files_checked: usize,
    /// Number of translation calls seen, suppressed ones included.
    pub call_sites: usize,
    /// Number of bundle files read from disk.
    pub bundles_loaded: usize,
}

impl AuditReport {
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// True if any key failed to resolve. This alone decides the exit status.
    pub fn has_broken_keys(&self) -> bool {
        self.issues.iter().any(|i| matches!(i, Issue::BrokenKey(_)))
    }

    fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == severity)
            .count()
    }
}

/// Audits translation keys for one invocation.
///
/// Owns the bundle cache, so every bundle is read at most once for the
/// lifetime of the auditor.
pub struct Auditor {
    root: PathBuf,
    functions: Vec<String>,
    default_namespace: Option<String>,
    broken_when: BrokenWhen,
    ignores: Vec<Pattern>,
    resolver: BundleResolver,
}

impl Auditor {
    /// Create an auditor from a validated configuration.
    ///
    /// `ignores` are the compiled patterns returned by [`Config::validate`].
    pub fn new(root: impl Into<PathBuf>, config: &Config, ignores: Vec<Pattern>) -> Self {
        let root = root.into();
        let bundle_dir = root
            .join(&config.bundle_root)
            .join(&config.canonical_locale);

        Self {
            root,
            functions: config.translation_functions.clone(),
            default_namespace: config.default_namespace.clone(),
            broken_when: config.broken_when,
            ignores,
            resolver: BundleResolver::new(bundle_dir),
        }
    }

    pub fn bundle_dir(&self) -> &Path {
        self.resolver.bundle_dir()
    }

    /// Audit the given input paths (relative to the root).
    pub async fn run(&mut self, inputs: &[String]) -> AuditReport {
        let mut report = AuditReport::default();

        for input in expand_inputs(&self.root, inputs, &self.ignores) {
            self.audit_file(&input, &mut report).await;
        }

        report.bundles_loaded = self.resolver.loads();
        report
    }

    async fn audit_file(&mut self, input: &SourceInput, report: &mut AuditReport) {
        let file_path = input.display_path.as_str();
        debug!("auditing {file_path}");

        let kind = match SourceKind::from_path(&input.path) {
            Ok(kind) => kind,
            Err(err) => {
                report.issues.push(Issue::UnsupportedFile(UnsupportedFileIssue {
                    file_path: file_path.to_string(),
                    error: err.to_string(),
                }));
                return;
            }
        };

        let parsed = match Self::load_source(input, kind) {
            Ok(parsed) => parsed,
            Err(err) => {
                report.issues.push(Issue::ParseError(ParseErrorIssue {
                    file_path: file_path.to_string(),
                    error: err.to_string(),
                }));
                return;
            }
        };
        report.files_checked += 1;

        let suppressions = CommentCollector::collect(&parsed.comments);
        let call_sites = CallSiteExtractor::new(file_path, &parsed.source_map, &self.functions)
            .extract(&parsed.module);

        for call in call_sites {
            report.call_sites += 1;
            self.audit_call(call, &suppressions, report).await;
        }
    }

    /// Read and parse one file into its own `SourceMap`, so the text of a
    /// file is released once its call sites are audited.
    fn load_source(input: &SourceInput, kind: SourceKind) -> Result<ParsedSource, SourceError> {
        let code = fs::read_to_string(&input.path)?;
        parse_source(code, &input.display_path, kind, Arc::new(SourceMap::default()))
    }

    async fn audit_call(
        &mut self,
        call: CallSite,
        suppressions: &Suppressions,
        report: &mut AuditReport,
    ) {
        let line = call.context.line();

        match call.key {
            KeyExpr::Dynamic(expression) => {
                if suppressions.is_suppressed(line, SuppressibleRule::ManualReview) {
                    return;
                }
                report.issues.push(Issue::ManualReview(ManualReviewIssue {
                    context: call.context,
                    callee: call.callee,
                    expression,
                }));
            }
            KeyExpr::Static(key) => {
                report.usages.push(KeyUsage {
                    location: call.context.location.clone(),
                    key: key.clone(),
                });
                if suppressions.is_suppressed(line, SuppressibleRule::BrokenKey) {
                    return;
                }
                if let Some(reason) = self.check_key(&key).await {
                    report.issues.push(Issue::BrokenKey(BrokenKeyIssue {
                        context: call.context,
                        key,
                        reason,
                    }));
                }
            }
        }
    }

    /// Resolve a static key, returning why it is broken if it is.
    async fn check_key(&mut self, text: &str) -> Option<BrokenKeyReason> {
        let key = LookupKey::parse(text, self.default_namespace.as_deref());
        let Some(namespace) = key.namespace else {
            return Some(BrokenKeyReason::NoNamespace);
        };
        let broken_when = self.broken_when;

        let Some(bundle) = self.resolver.resolve(&namespace).await else {
            return Some(BrokenKeyReason::NamespaceNotFound { namespace });
        };

        match evaluate_path(Some(bundle), &key.path) {
            None => Some(BrokenKeyReason::MissingPath { namespace }),
            value if broken_when.is_broken(value) => {
                Some(BrokenKeyReason::EmptyValue { namespace })
            }
            _ => None,
        }
    }
}
