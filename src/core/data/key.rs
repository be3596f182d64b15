/// A translation key split into its namespace and dotted path.
///
/// `"common:buttons.save"` has namespace `common` and path `buttons.save`.
/// The namespace is everything before the first colon; the path is everything
/// after it, so `"a:b:c"` has namespace `a` and path `b:c`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey {
    /// Bundle namespace. `None` when the key has no colon and no default
    /// namespace is configured.
    pub namespace: Option<String>,
    /// Dotted path inside the namespace bundle.
    pub path: String,
}

impl LookupKey {
    /// Split key text at the first colon.
    ///
    /// Keys without a colon fall back to `default_namespace` and use the whole
    /// text as the path.
    pub fn parse(text: &str, default_namespace: Option<&str>) -> Self {
        match text.split_once(':') {
            Some((namespace, path)) => Self {
                namespace: Some(namespace.to_string()),
                path: path.to_string(),
            },
            None => Self {
                namespace: default_namespace.map(str::to_string),
                path: text.to_string(),
            },
        }
    }
}
