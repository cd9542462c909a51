#![deny(unsafe_code)]

//! Pre-flight validation of user parameter maps against a declarative
//! parameter specification.
//!
//! The entry point is [`validate`]: a required-presence pass over the
//! declared parameters, per-parameter type/constraint and dependency checks
//! over the supplied keys, then the specification's cross-cutting rules,
//! all aggregated into one [`ValidationReport`]. Nothing short-circuits: a
//! malformed configuration surfaces every violation in a single pass.

mod checks;
mod condition;
mod rules;

pub use checks::{check_dependencies, check_parameter};
pub use condition::Condition;
pub use rules::RuleEngine;

use mapcfg_model::{IssueCode, ParamSet, UserParams, ValidationIssue, ValidationReport};

/// Validate a user parameter map against a specification.
///
/// Pure and re-entrant: identical inputs yield structurally identical
/// reports, neither input is mutated, and concurrent calls with independent
/// inputs never interact.
pub fn validate(params: &UserParams, spec: &ParamSet) -> ValidationReport {
    let mut report = ValidationReport::default();

    for param in &spec.parameters {
        if param.required && !params.contains_key(param.name.as_str()) {
            report.push(ValidationIssue::error(
                IssueCode::MissingRequired,
                &param.name,
                format!("missing required parameter: {}", param.name),
            ));
        }
    }

    for (name, value) in params {
        let Some(param) = spec.parameter(name) else {
            // Unknown parameters warn and are never type-checked.
            report.push(ValidationIssue::warning(
                IssueCode::UnknownParameter,
                name,
                format!("unknown parameter: {name}"),
            ));
            continue;
        };
        report.extend(check_parameter(param, value));
        if let Some(warning) = check_dependencies(param, params) {
            report.push(warning);
        }
    }

    let rules = spec.rules();
    if !rules.is_empty() {
        report.extend(RuleEngine::new(rules).apply(params));
    }

    report
}
