#![deny(unsafe_code)]

pub mod param;
pub mod report;
pub mod rule;
pub mod value;

pub use param::{
    CoordinateBounds, DependsOnExpectation, NumericRange, OptionEntry, ParamOptions, ParamSet,
    ParamSpec, ParamType, RuleSet,
};
pub use report::{IssueCode, IssueSeverity, ValidationIssue, ValidationReport};
pub use rule::ValidationRule;
pub use value::{UserParams, ValueKind, is_truthy, values_equal};
