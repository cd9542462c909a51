use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A specification-level rule tying a condition to required companion
/// parameters or suggested defaults.
///
/// The condition text uses the fixed mini-language understood by the
/// validator's condition parser; rules with conditions outside that
/// vocabulary never fire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationRule {
    pub condition: String,
    /// Parameters that must be present when the condition holds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
    /// Suggested defaults for parameters absent when the condition holds.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub suggests: IndexMap<String, Value>,
    /// Explanation attached to violations and suggestions from this rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
