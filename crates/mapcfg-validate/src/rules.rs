//! Application of specification-level validation rules.

use mapcfg_model::{IssueCode, UserParams, ValidationIssue, ValidationRule};

use crate::condition::Condition;

/// Applies specification-level rules to a parameter map.
///
/// Rules are independent of one another: evaluation order only affects the
/// order of report entries, never which entries appear.
#[derive(Debug)]
pub struct RuleEngine<'a> {
    rules: &'a [ValidationRule],
}

impl<'a> RuleEngine<'a> {
    pub fn new(rules: &'a [ValidationRule]) -> Self {
        Self { rules }
    }

    /// Evaluate every rule in declared order and collect its findings.
    ///
    /// When a rule's condition holds, each missing `requires` parameter
    /// becomes an error (the rule's message, or a generated one naming the
    /// parameter) and each absent `suggests` parameter becomes a suggestion
    /// carrying the JSON-rendered suggested value. A false condition
    /// contributes nothing.
    pub fn apply(&self, params: &UserParams) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for rule in self.rules {
            if !Condition::parse(&rule.condition).evaluate(params) {
                continue;
            }
            for required in &rule.requires {
                if params.contains_key(required.as_str()) {
                    continue;
                }
                let message = rule
                    .message
                    .clone()
                    .unwrap_or_else(|| format!("parameter {required} is required"));
                issues.push(ValidationIssue::error(
                    IssueCode::RuleViolation,
                    required,
                    message,
                ));
            }
            for (param, suggested) in &rule.suggests {
                if params.contains_key(param.as_str()) {
                    continue;
                }
                let mut message = format!("consider setting {param} to {suggested}");
                if let Some(note) = &rule.message {
                    message.push_str(": ");
                    message.push_str(note);
                }
                issues.push(ValidationIssue::suggestion(
                    IssueCode::RuleSuggestion,
                    param,
                    message,
                ));
            }
        }
        issues
    }
}
