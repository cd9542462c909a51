//! End-to-end tests for the validation core.

use proptest::prelude::*;
use serde_json::json;

use mapcfg_model::{IssueCode, IssueSeverity, ParamSet, UserParams};
use mapcfg_validate::validate;

fn spec(value: serde_json::Value) -> ParamSet {
    serde_json::from_value(value).expect("specification")
}

fn params(value: serde_json::Value) -> UserParams {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("params must be an object"),
    }
}

// ============================================================================
// Required-presence checks
// ============================================================================

#[test]
fn missing_required_parameter_reports_exactly_one_error() {
    let spec = spec(json!({
        "parameters": [{"name": "title", "type": "string", "required": true}]
    }));
    let report = validate(&params(json!({})), &spec);

    assert_eq!(report.error_count(), 1);
    assert_eq!(report.warning_count(), 0);
    assert_eq!(report.issues[0].code, IssueCode::MissingRequired);
    assert_eq!(report.issues[0].message, "missing required parameter: title");
    assert!(!report.is_valid());
}

#[test]
fn present_required_parameter_reports_nothing() {
    let spec = spec(json!({
        "parameters": [{"name": "title", "type": "string", "required": true}]
    }));
    let report = validate(&params(json!({"title": "My Map"})), &spec);
    assert!(report.is_valid());
    assert!(report.issues.is_empty());
}

// ============================================================================
// Type and constraint checks
// ============================================================================

#[test]
fn string_type_mismatch_names_actual_kind() {
    let spec = spec(json!({
        "parameters": [{"name": "title", "type": "string"}]
    }));
    let report = validate(&params(json!({"title": 42})), &spec);

    assert_eq!(report.error_count(), 1);
    assert_eq!(report.issues[0].code, IssueCode::TypeMismatch);
    assert_eq!(report.issues[0].message, "title: expected string, got number");
}

#[test]
fn string_pattern_mismatch_reports_value_and_pattern() {
    let spec = spec(json!({
        "parameters": [{"name": "viztype", "type": "string", "pattern": "^[A-Z|]+$"}]
    }));

    let failing = validate(&params(json!({"viztype": "chart"})), &spec);
    assert_eq!(failing.error_count(), 1);
    assert_eq!(failing.issues[0].code, IssueCode::PatternMismatch);
    assert!(failing.issues[0].message.contains("chart"));
    assert!(failing.issues[0].message.contains("^[A-Z|]+$"));

    let passing = validate(&params(json!({"viztype": "CHART|BUBBLE"})), &spec);
    assert!(passing.issues.is_empty());
}

#[test]
fn number_out_of_range_mentions_value_and_bound() {
    let spec = spec(json!({
        "parameters": [{"name": "zoom", "type": "number", "min": 1, "max": 18}]
    }));

    let report = validate(&params(json!({"zoom": 25})), &spec);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.issues[0].code, IssueCode::RangeViolation);
    assert!(report.issues[0].message.contains("25"));
    assert!(report.issues[0].message.contains("18"));

    let at_max = validate(&params(json!({"zoom": 18})), &spec);
    assert!(at_max.issues.is_empty());
    let at_min = validate(&params(json!({"zoom": 1})), &spec);
    assert!(at_min.issues.is_empty());
}

#[test]
fn number_type_mismatch_skips_range_checks() {
    let spec = spec(json!({
        "parameters": [{"name": "zoom", "type": "number", "min": 1, "max": 18}]
    }));
    let report = validate(&params(json!({"zoom": "6"})), &spec);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.issues[0].code, IssueCode::TypeMismatch);
}

#[test]
fn inverted_bounds_fire_both_range_violations() {
    // min above max is a specification authoring error; both checks still
    // run and both fire for a value between them.
    let spec = spec(json!({
        "parameters": [{"name": "zoom", "type": "number", "min": 10, "max": 5}]
    }));
    let report = validate(&params(json!({"zoom": 7})), &spec);
    assert_eq!(report.error_count(), 2);
}

#[test]
fn boolean_type_mismatch() {
    let spec = spec(json!({
        "parameters": [{"name": "cluster", "type": "boolean"}]
    }));
    let report = validate(&params(json!({"cluster": "yes"})), &spec);
    assert_eq!(report.error_count(), 1);
    assert_eq!(
        report.issues[0].message,
        "cluster: expected boolean, got string"
    );
    let passing = validate(&params(json!({"cluster": true})), &spec);
    assert!(passing.issues.is_empty());
}

#[test]
fn select_rejects_value_outside_declared_options() {
    let spec = spec(json!({
        "parameters": [{"name": "viztype", "type": "select", "options": ["CHART", "BUBBLE"]}]
    }));
    let report = validate(&params(json!({"viztype": "MAP"})), &spec);

    assert_eq!(report.error_count(), 1);
    assert_eq!(report.issues[0].code, IssueCode::InvalidOption);
    assert!(report.issues[0].message.contains("CHART, BUBBLE"));
}

#[test]
fn select_accepts_grouped_descriptor_options() {
    let spec = spec(json!({
        "parameters": [{
            "name": "maptype",
            "type": "select",
            "options": {
                "vector": [{"value": "VT_TONER_LITE", "label": "Toner Lite"}],
                "raster": [{"value": "OSM"}]
            }
        }]
    }));
    let passing = validate(&params(json!({"maptype": "OSM"})), &spec);
    assert!(passing.issues.is_empty());

    let failing = validate(&params(json!({"maptype": "GOOGLE"})), &spec);
    assert_eq!(failing.error_count(), 1);
    assert!(failing.issues[0].message.contains("VT_TONER_LITE, OSM"));
}

#[test]
fn select_without_options_is_permissive() {
    let spec = spec(json!({
        "parameters": [{"name": "viztype", "type": "select"}]
    }));
    let report = validate(&params(json!({"viztype": "ANYTHING"})), &spec);
    assert!(report.issues.is_empty());
}

#[test]
fn colors_requires_an_array() {
    let spec = spec(json!({
        "parameters": [{"name": "colorscheme", "type": "colors"}]
    }));
    let failing = validate(&params(json!({"colorscheme": "#0066cc"})), &spec);
    assert_eq!(failing.error_count(), 1);
    assert_eq!(failing.issues[0].code, IssueCode::TypeMismatch);

    let passing = validate(&params(json!({"colorscheme": ["#0066cc"]})), &spec);
    assert!(passing.issues.is_empty());
}

// ============================================================================
// Coordinates
// ============================================================================

fn coordinates_spec() -> ParamSet {
    spec(json!({
        "parameters": [{
            "name": "center",
            "type": "coordinates",
            "validation": {
                "lat": {"min": -90, "max": 90},
                "lng": {"min": -180, "max": 180}
            }
        }]
    }))
}

#[test]
fn coordinates_accept_in_range_object() {
    let report = validate(&params(json!({"center": {"lat": 42.5, "lng": 12.5}})), &coordinates_spec());
    assert!(report.issues.is_empty());
}

#[test]
fn coordinates_reject_missing_fields() {
    let report = validate(&params(json!({"center": {"lat": 42.5}})), &coordinates_spec());
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.issues[0].code, IssueCode::StructuralMismatch);

    let not_an_object = validate(&params(json!({"center": [42.5, 12.5]})), &coordinates_spec());
    assert_eq!(not_an_object.error_count(), 1);
    assert_eq!(not_an_object.issues[0].code, IssueCode::StructuralMismatch);
}

#[test]
fn coordinates_out_of_bounds_report_range_violations() {
    let report = validate(&params(json!({"center": {"lat": 95.0, "lng": 200.0}})), &coordinates_spec());
    assert_eq!(report.error_count(), 2);
    assert!(report.issues[0].message.contains("latitude"));
    assert!(report.issues[1].message.contains("longitude"));
}

#[test]
fn coordinates_zero_lat_lng_fail_presence_check() {
    // Known quirk: presence of lat/lng is a truthiness check, so the
    // equator/prime-meridian point {lat: 0, lng: 0} is reported as missing
    // its fields. Pinned here as current behavior.
    let report = validate(&params(json!({"center": {"lat": 0, "lng": 0}})), &coordinates_spec());
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.issues[0].code, IssueCode::StructuralMismatch);
}

// ============================================================================
// Unknown parameters and dependencies
// ============================================================================

#[test]
fn unknown_parameters_warn_and_are_never_type_checked() {
    let spec = spec(json!({"parameters": []}));
    let report = validate(
        &params(json!({"mystery": {"deeply": ["nested", 0]}})),
        &spec,
    );
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.warning_count(), 1);
    assert_eq!(report.issues[0].code, IssueCode::UnknownParameter);
    assert_eq!(report.issues[0].message, "unknown parameter: mystery");
    assert!(report.is_valid());
}

#[test]
fn unmet_dependency_warns_and_names_unsatisfied_keys() {
    let spec = spec(json!({
        "parameters": [
            {"name": "viztype", "type": "string"},
            {
                "name": "colorscheme",
                "type": "colors",
                "depends_on": {"viztype": ["CHART", "BUBBLE"]}
            }
        ]
    }));
    let report = validate(
        &params(json!({"viztype": "MAP", "colorscheme": ["#0066cc"]})),
        &spec,
    );

    assert!(report.is_valid());
    assert_eq!(report.warning_count(), 1);
    let warning = report.warnings()[0];
    assert_eq!(warning.code, IssueCode::UnsatisfiedDependency);
    assert!(warning.message.starts_with("colorscheme:"));
    assert!(warning.message.contains("viztype"));
}

#[test]
fn met_dependency_stays_silent() {
    let spec = spec(json!({
        "parameters": [
            {"name": "viztype", "type": "string"},
            {
                "name": "colorscheme",
                "type": "colors",
                "depends_on": {"viztype": "CHART"}
            }
        ]
    }));
    let report = validate(
        &params(json!({"viztype": "CHART", "colorscheme": ["#0066cc"]})),
        &spec,
    );
    assert!(report.issues.is_empty());
}

// ============================================================================
// Rules
// ============================================================================

#[test]
fn rule_violation_uses_the_rule_message() {
    let spec = spec(json!({
        "parameters": [{"name": "viztype", "type": "string"}],
        "validation": {
            "rules": [{
                "condition": "viztype contains \"CHART\"",
                "requires": ["colorscheme"],
                "message": "chart visualizations need a colorscheme"
            }]
        }
    }));
    let report = validate(&params(json!({"viztype": "CHART|BUBBLE"})), &spec);

    assert_eq!(report.error_count(), 1);
    let error = report.errors()[0];
    assert_eq!(error.code, IssueCode::RuleViolation);
    assert_eq!(error.message, "chart visualizations need a colorscheme");
}

#[test]
fn rule_without_message_generates_a_default() {
    let spec = spec(json!({
        "parameters": [{"name": "viztype", "type": "string"}],
        "validation": {
            "rules": [{
                "condition": "viztype contains \"CHART\"",
                "requires": ["colorscheme"]
            }]
        }
    }));
    let report = validate(&params(json!({"viztype": "CHART"})), &spec);
    assert_eq!(
        report.errors()[0].message,
        "parameter colorscheme is required"
    );
}

#[test]
fn rule_suggestion_renders_the_suggested_value_as_json() {
    let spec = spec(json!({
        "parameters": [{"name": "maptype", "type": "string"}],
        "validation": {
            "rules": [{
                "condition": "maptype \"vector basemap\" starts with \"VT_\"",
                "suggests": {"zoom": 6},
                "message": "vector basemaps render best at country-level zoom"
            }]
        }
    }));
    let report = validate(&params(json!({"maptype": "VT_TONER_LITE"})), &spec);

    assert!(report.is_valid());
    assert_eq!(report.suggestion_count(), 1);
    let suggestion = report.suggestions()[0];
    assert_eq!(suggestion.code, IssueCode::RuleSuggestion);
    assert_eq!(
        suggestion.message,
        "consider setting zoom to 6: vector basemaps render best at country-level zoom"
    );
}

#[test]
fn rule_with_false_condition_contributes_nothing() {
    let spec = spec(json!({
        "parameters": [{"name": "viztype", "type": "string"}],
        "validation": {
            "rules": [{
                "condition": "viztype contains \"CHART\"",
                "requires": ["colorscheme"]
            }]
        }
    }));
    let report = validate(&params(json!({"viztype": "MAP"})), &spec);
    assert!(report.issues.is_empty());
}

#[test]
fn satisfied_requires_and_present_suggests_stay_silent() {
    let spec = spec(json!({
        "parameters": [
            {"name": "viztype", "type": "string"},
            {"name": "colorscheme", "type": "colors"},
            {"name": "zoom", "type": "number"}
        ],
        "validation": {
            "rules": [{
                "condition": "viztype contains \"CHART\"",
                "requires": ["colorscheme"],
                "suggests": {"zoom": 6}
            }]
        }
    }));
    let report = validate(
        &params(json!({"viztype": "CHART", "colorscheme": ["#0066cc"], "zoom": 4})),
        &spec,
    );
    assert!(report.issues.is_empty());
}

// ============================================================================
// Aggregation
// ============================================================================

#[test]
fn every_violation_surfaces_in_one_pass() {
    let spec = spec(json!({
        "parameters": [
            {"name": "title", "type": "string", "required": true},
            {"name": "zoom", "type": "number", "min": 1, "max": 18},
            {"name": "viztype", "type": "select", "options": ["CHART", "BUBBLE"]}
        ]
    }));
    let report = validate(
        &params(json!({"zoom": 25, "viztype": "MAP", "mystery": 1})),
        &spec,
    );

    assert_eq!(report.error_count(), 3);
    assert_eq!(report.warning_count(), 1);
    let codes: Vec<IssueCode> = report.issues.iter().map(|issue| issue.code).collect();
    assert!(codes.contains(&IssueCode::MissingRequired));
    assert!(codes.contains(&IssueCode::RangeViolation));
    assert!(codes.contains(&IssueCode::InvalidOption));
    assert!(codes.contains(&IssueCode::UnknownParameter));
}

#[test]
fn validate_is_pure() {
    let spec = spec(json!({
        "parameters": [
            {"name": "title", "type": "string", "required": true},
            {"name": "zoom", "type": "number", "min": 1, "max": 18}
        ]
    }));
    let user = params(json!({"zoom": 25}));

    let first = validate(&user, &spec);
    let second = validate(&user, &spec);
    assert_eq!(first, second);
}

#[test]
fn severities_partition_the_report() {
    let spec = spec(json!({
        "parameters": [{"name": "title", "type": "string", "required": true}]
    }));
    let report = validate(&params(json!({"extra": 1})), &spec);
    for issue in &report.issues {
        match issue.severity {
            IssueSeverity::Error => assert_eq!(issue.code, IssueCode::MissingRequired),
            IssueSeverity::Warning => assert_eq!(issue.code, IssueCode::UnknownParameter),
            IssueSeverity::Suggestion => panic!("no suggestions expected"),
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn inclusive_bounds_admit_inside_and_reject_outside(zoom in -100i64..120) {
        let spec = spec(json!({
            "parameters": [{"name": "zoom", "type": "number", "min": 1, "max": 18}]
        }));
        let report = validate(&params(json!({"zoom": zoom})), &spec);
        if (1..=18).contains(&zoom) {
            prop_assert!(report.issues.is_empty());
        } else {
            prop_assert_eq!(report.error_count(), 1);
            prop_assert_eq!(report.issues[0].code, IssueCode::RangeViolation);
        }
    }
}
