//! Resolution: walking a bundle by dotted path and deciding whether the
//! resolved value counts as present.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resolve a dotted path against a bundle.
///
/// The path is split on `.` and every segment is trimmed. Each step must land
/// on an object that has the segment as a key, otherwise the result is `None`.
/// Arrays are not indexed. An empty path still looks up a single empty
/// segment, and a missing bundle always resolves to `None`.
///
/// # Examples
///
/// ```
/// use i18n_audit::core::resolve::evaluate_path;
/// use serde_json::json;
///
/// let bundle = json!({"form": {"title": "Hello"}});
/// assert_eq!(evaluate_path(Some(&bundle), "form.title"), Some(&json!("Hello")));
/// assert_eq!(evaluate_path(Some(&bundle), "form.missing"), None);
/// assert_eq!(evaluate_path(None, "form.title"), None);
/// ```
pub fn evaluate_path<'a>(bundle: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    path.split('.')
        .map(str::trim)
        .try_fold(bundle?, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            _ => None,
        })
}

/// When a resolved value counts as a broken key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BrokenWhen {
    /// Absent, `null`, `false`, `0` and `""` are all broken.
    #[default]
    Falsy,
    /// Only absent and `null` values are broken.
    Missing,
}

impl BrokenWhen {
    pub fn is_broken(self, value: Option<&Value>) -> bool {
        match (self, value) {
            (_, None | Some(Value::Null)) => true,
            (Self::Missing, Some(_)) => false,
            (Self::Falsy, Some(value)) => is_falsy(value),
        }
    }
}

/// JSON counterpart of JavaScript falsiness. Objects and arrays, empty or
/// not, are truthy.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
