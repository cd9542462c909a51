use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a validation issue.
///
/// A report with one or more `Error` issues rejects the configuration;
/// warnings and suggestions never block validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
    Suggestion,
}

/// Closed set of issue codes the validator emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Required parameter absent from the configuration.
    MissingRequired,
    /// Value's runtime type disagrees with the declared type.
    TypeMismatch,
    /// String value fails the declared regular expression.
    PatternMismatch,
    /// Numeric value or coordinate sub-field outside declared bounds.
    RangeViolation,
    /// Select value not among the declared options.
    InvalidOption,
    /// Coordinates value missing the required shape.
    StructuralMismatch,
    /// Supplied key not declared in the specification (warning).
    UnknownParameter,
    /// Declared prerequisite on another parameter not met (warning).
    UnsatisfiedDependency,
    /// A rule's condition held and a required companion is missing.
    RuleViolation,
    /// A rule's condition held and an optional companion is absent.
    RuleSuggestion,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::MissingRequired => "missing_required",
            IssueCode::TypeMismatch => "type_mismatch",
            IssueCode::PatternMismatch => "pattern_mismatch",
            IssueCode::RangeViolation => "range_violation",
            IssueCode::InvalidOption => "invalid_option",
            IssueCode::StructuralMismatch => "structural_mismatch",
            IssueCode::UnknownParameter => "unknown_parameter",
            IssueCode::UnsatisfiedDependency => "unsatisfied_dependency",
            IssueCode::RuleViolation => "rule_violation",
            IssueCode::RuleSuggestion => "rule_suggestion",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single finding from one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: IssueCode,
    /// Parameter the issue concerns, when attributable to one.
    pub parameter: Option<String>,
    /// Human-readable message describing the issue.
    pub message: String,
}

impl ValidationIssue {
    pub fn error(code: IssueCode, parameter: &str, message: impl Into<String>) -> Self {
        Self::new(IssueSeverity::Error, code, parameter, message)
    }

    pub fn warning(code: IssueCode, parameter: &str, message: impl Into<String>) -> Self {
        Self::new(IssueSeverity::Warning, code, parameter, message)
    }

    pub fn suggestion(code: IssueCode, parameter: &str, message: impl Into<String>) -> Self {
        Self::new(IssueSeverity::Suggestion, code, parameter, message)
    }

    fn new(
        severity: IssueSeverity,
        code: IssueCode,
        parameter: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code,
            parameter: Some(parameter.to_string()),
            message: message.into(),
        }
    }
}

/// Aggregated result of one validation pass.
///
/// Issues appear in the order the validator found them: required-presence
/// errors first, then per-parameter findings, then rule findings. Built
/// fresh per call; there is no cross-call state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = ValidationIssue>) {
        self.issues.extend(issues);
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.with_severity(IssueSeverity::Error)
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.with_severity(IssueSeverity::Warning)
    }

    pub fn suggestions(&self) -> Vec<&ValidationIssue> {
        self.with_severity(IssueSeverity::Suggestion)
    }

    pub fn error_count(&self) -> usize {
        self.errors().len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().len()
    }

    pub fn suggestion_count(&self) -> usize {
        self.suggestions().len()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// A configuration is accepted exactly when the report has no errors.
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    fn with_severity(&self, severity: IssueSeverity) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .collect()
    }
}
