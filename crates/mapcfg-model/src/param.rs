use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::rule::ValidationRule;
use crate::value::values_equal;

/// Declared type of a configurable parameter.
///
/// The type decides which of the optional [`ParamSpec`] fields are
/// meaningful; the rest are ignored for that parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Boolean,
    Select,
    Colors,
    Coordinates,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Boolean => "boolean",
            ParamType::Select => "select",
            ParamType::Colors => "colors",
            ParamType::Coordinates => "coordinates",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selectable option: either a descriptor carrying a submission value
/// and an optional display label, or a bare literal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry {
    Descriptor {
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
    },
    Bare(Value),
}

impl OptionEntry {
    /// The value a user configuration must supply to pick this option.
    pub fn value(&self) -> &Value {
        match self {
            OptionEntry::Descriptor { value, .. } => value,
            OptionEntry::Bare(value) => value,
        }
    }
}

/// Valid options for a select parameter: a flat ordered list, or lists
/// grouped by category name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamOptions {
    Flat(Vec<OptionEntry>),
    Grouped(IndexMap<String, Vec<OptionEntry>>),
}

impl ParamOptions {
    /// Flatten to the canonical ordered sequence of valid option values.
    ///
    /// Order-preserving and exhaustive: flat entries contribute in declared
    /// order, grouped entries group by group in declared order. Both shapes
    /// of equivalent options flatten to the same sequence.
    pub fn flatten(&self) -> Vec<&Value> {
        match self {
            ParamOptions::Flat(entries) => entries.iter().map(OptionEntry::value).collect(),
            ParamOptions::Grouped(groups) => groups
                .values()
                .flat_map(|entries| entries.iter().map(OptionEntry::value))
                .collect(),
        }
    }
}

/// Inclusive numeric range for a coordinate sub-field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Nested range constraints for a coordinates parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<NumericRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<NumericRange>,
}

/// Expected value(s) of a dependency: a single scalar or any of a set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependsOnExpectation {
    AnyOf(Vec<Value>),
    Equals(Value),
}

impl DependsOnExpectation {
    /// True when the dependency's actual value meets this expectation.
    /// An absent value satisfies nothing.
    pub fn matches(&self, actual: Option<&Value>) -> bool {
        let Some(actual) = actual else {
            return false;
        };
        match self {
            DependsOnExpectation::AnyOf(values) => {
                values.iter().any(|value| values_equal(value, actual))
            }
            DependsOnExpectation::Equals(value) => values_equal(value, actual),
        }
    }
}

/// One declared parameter of a specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Unique within a specification.
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    #[serde(default)]
    pub required: bool,
    /// Regular expression a string value must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Inclusive lower bound for a number value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound for a number value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ParamOptions>,
    /// Sub-field ranges for a coordinates value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<CoordinateBounds>,
    /// Prerequisites on other parameters; all entries must hold.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub depends_on: IndexMap<String, DependsOnExpectation>,
}

/// Specification-level validation rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: Vec<ValidationRule>,
}

/// A full parameter specification: the declared parameters plus optional
/// cross-cutting rules. Loaded once per run and immutable afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParamSet {
    pub parameters: Vec<ParamSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<RuleSet>,
}

impl ParamSet {
    /// Look up a declared parameter by name.
    pub fn parameter(&self, name: &str) -> Option<&ParamSpec> {
        self.parameters.iter().find(|param| param.name == name)
    }

    /// The declared rules, empty when the specification has none.
    pub fn rules(&self) -> &[ValidationRule] {
        self.validation
            .as_ref()
            .map(|ruleset| ruleset.rules.as_slice())
            .unwrap_or(&[])
    }
}
