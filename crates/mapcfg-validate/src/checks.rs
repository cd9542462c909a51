//! Per-parameter type/constraint checks and dependency checks.
//!
//! Each check inspects one supplied value against its declared parameter and
//! returns report entries; nothing here panics on malformed user input.

use regex::Regex;
use serde_json::Value;

use mapcfg_model::{
    IssueCode, ParamSpec, ParamType, UserParams, ValidationIssue, ValueKind, is_truthy,
    values_equal,
};

/// Check one supplied value against its declared parameter.
pub fn check_parameter(spec: &ParamSpec, value: &Value) -> Vec<ValidationIssue> {
    match spec.param_type {
        ParamType::String => check_string(spec, value),
        ParamType::Number => check_number(spec, value),
        ParamType::Boolean => check_boolean(spec, value),
        ParamType::Select => check_select(spec, value),
        ParamType::Colors => check_colors(spec, value),
        ParamType::Coordinates => check_coordinates(spec, value),
    }
}

/// Check a parameter's declared prerequisites against the full map.
///
/// Every `depends_on` entry must hold; otherwise a single warning lists the
/// unsatisfied dependency keys in declared order. Dependency violations never
/// reject the configuration.
pub fn check_dependencies(spec: &ParamSpec, params: &UserParams) -> Option<ValidationIssue> {
    if spec.depends_on.is_empty() {
        return None;
    }
    let mut unsatisfied = Vec::new();
    for (dependency, expected) in &spec.depends_on {
        if !expected.matches(params.get(dependency.as_str())) {
            unsatisfied.push(dependency.as_str());
        }
    }
    if unsatisfied.is_empty() {
        return None;
    }
    Some(ValidationIssue::warning(
        IssueCode::UnsatisfiedDependency,
        &spec.name,
        format!(
            "{}: dependencies not satisfied, check {}",
            spec.name,
            unsatisfied.join(", ")
        ),
    ))
}

fn check_string(spec: &ParamSpec, value: &Value) -> Vec<ValidationIssue> {
    let Value::String(text) = value else {
        return vec![type_mismatch(spec, "string", value)];
    };
    let Some(pattern) = spec.pattern.as_deref() else {
        return Vec::new();
    };
    // Pattern syntax is vetted by the specification loader; a pattern that
    // still fails to compile is skipped rather than reported or panicked on.
    let Ok(regex) = Regex::new(pattern) else {
        return Vec::new();
    };
    if regex.is_match(text) {
        return Vec::new();
    }
    vec![ValidationIssue::error(
        IssueCode::PatternMismatch,
        &spec.name,
        format!(
            "{}: value \"{}\" does not match pattern {}",
            spec.name, text, pattern
        ),
    )]
}

fn check_number(spec: &ParamSpec, value: &Value) -> Vec<ValidationIssue> {
    let Some(number) = value.as_f64() else {
        return vec![type_mismatch(spec, "number", value)];
    };
    let mut issues = Vec::new();
    // Both bound checks run independently; a min above max is a
    // specification authoring error and both violations will fire.
    if let Some(min) = spec.min
        && number < min
    {
        issues.push(ValidationIssue::error(
            IssueCode::RangeViolation,
            &spec.name,
            format!("{}: value {} is below minimum {}", spec.name, number, min),
        ));
    }
    if let Some(max) = spec.max
        && number > max
    {
        issues.push(ValidationIssue::error(
            IssueCode::RangeViolation,
            &spec.name,
            format!("{}: value {} is above maximum {}", spec.name, number, max),
        ));
    }
    issues
}

fn check_boolean(spec: &ParamSpec, value: &Value) -> Vec<ValidationIssue> {
    if value.is_boolean() {
        Vec::new()
    } else {
        vec![type_mismatch(spec, "boolean", value)]
    }
}

fn check_select(spec: &ParamSpec, value: &Value) -> Vec<ValidationIssue> {
    let Some(options) = spec.options.as_ref() else {
        return Vec::new();
    };
    let valid = options.flatten();
    // No declared options means no membership check.
    if valid.is_empty() {
        return Vec::new();
    }
    if valid.iter().any(|option| values_equal(option, value)) {
        return Vec::new();
    }
    let listing = valid
        .iter()
        .map(|option| render_option(option))
        .collect::<Vec<_>>()
        .join(", ");
    vec![ValidationIssue::error(
        IssueCode::InvalidOption,
        &spec.name,
        format!(
            "{}: invalid option {}, valid options: {}",
            spec.name,
            render_supplied(value),
            listing
        ),
    )]
}

fn check_colors(spec: &ParamSpec, value: &Value) -> Vec<ValidationIssue> {
    if value.is_array() {
        Vec::new()
    } else {
        vec![type_mismatch(spec, "array of colors", value)]
    }
}

fn check_coordinates(spec: &ParamSpec, value: &Value) -> Vec<ValidationIssue> {
    // Presence of lat/lng is a truthiness check, so a coordinate of exactly
    // 0 fails it. Pinned by the known-quirk test in tests/validate.rs.
    let Some(object) = value.as_object() else {
        return vec![structural_mismatch(spec)];
    };
    let lat = object.get("lat");
    let lng = object.get("lng");
    if !lat.is_some_and(is_truthy) || !lng.is_some_and(is_truthy) {
        return vec![structural_mismatch(spec)];
    }
    let Some(bounds) = spec.validation else {
        return Vec::new();
    };
    let mut issues = Vec::new();
    if let (Some(range), Some(lat)) = (bounds.lat, lat.and_then(Value::as_f64))
        && !range.contains(lat)
    {
        issues.push(ValidationIssue::error(
            IssueCode::RangeViolation,
            &spec.name,
            format!(
                "{}: latitude must be between {} and {}",
                spec.name, range.min, range.max
            ),
        ));
    }
    if let (Some(range), Some(lng)) = (bounds.lng, lng.and_then(Value::as_f64))
        && !range.contains(lng)
    {
        issues.push(ValidationIssue::error(
            IssueCode::RangeViolation,
            &spec.name,
            format!(
                "{}: longitude must be between {} and {}",
                spec.name, range.min, range.max
            ),
        ));
    }
    issues
}

fn type_mismatch(spec: &ParamSpec, expected: &str, value: &Value) -> ValidationIssue {
    ValidationIssue::error(
        IssueCode::TypeMismatch,
        &spec.name,
        format!(
            "{}: expected {}, got {}",
            spec.name,
            expected,
            ValueKind::of(value)
        ),
    )
}

fn structural_mismatch(spec: &ParamSpec) -> ValidationIssue {
    ValidationIssue::error(
        IssueCode::StructuralMismatch,
        &spec.name,
        format!("{}: expected object with lat and lng properties", spec.name),
    )
}

fn render_option(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn render_supplied(value: &Value) -> String {
    match value {
        Value::String(text) => format!("\"{text}\""),
        other => other.to_string(),
    }
}
