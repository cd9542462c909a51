//! The fixed-vocabulary condition mini-language.
//!
//! Rule conditions are parsed into an explicit AST before evaluation, so the
//! vocabulary's limits are visible in the type rather than implicit in
//! string-search order. Exactly two phrasings are recognized; everything
//! else is [`Condition::Unrecognized`] and never evaluates true. Growing
//! this into a general expression language is a non-goal.

use serde_json::Value;

use mapcfg_model::UserParams;

/// Parsed form of a rule condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `<key> "<label>" starts with "<prefix>"`. The labelled quote is
    /// informational; only the prefix participates in evaluation.
    StartsWith { key: String, prefix: String },
    /// `<key> contains "<needle>"`
    Contains { key: String, needle: String },
    /// Anything outside the vocabulary, including phrasings missing their
    /// quoted operands.
    Unrecognized,
}

impl Condition {
    /// Parse a condition text.
    ///
    /// The parameter key is always the first whitespace-separated token of
    /// the whole condition. The starts-with phrasing takes priority over
    /// contains when both substrings appear.
    pub fn parse(text: &str) -> Self {
        let Some(key) = text.split_whitespace().next() else {
            return Condition::Unrecognized;
        };
        let quoted = quoted_segments(text);
        if text.contains("starts with") {
            return match quoted.get(1) {
                Some(prefix) => Condition::StartsWith {
                    key: key.to_string(),
                    prefix: (*prefix).to_string(),
                },
                None => Condition::Unrecognized,
            };
        }
        if text.contains("contains") {
            return match quoted.first() {
                Some(needle) => Condition::Contains {
                    key: key.to_string(),
                    needle: (*needle).to_string(),
                },
                None => Condition::Unrecognized,
            };
        }
        Condition::Unrecognized
    }

    /// Evaluate against a parameter map.
    ///
    /// A missing or non-string target evaluates to false; so does
    /// `Unrecognized`. Evaluation never fails.
    pub fn evaluate(&self, params: &UserParams) -> bool {
        match self {
            Condition::StartsWith { key, prefix } => {
                string_param(params, key).is_some_and(|text| text.starts_with(prefix.as_str()))
            }
            Condition::Contains { key, needle } => {
                string_param(params, key).is_some_and(|text| text.contains(needle.as_str()))
            }
            Condition::Unrecognized => false,
        }
    }
}

fn string_param<'a>(params: &'a UserParams, key: &str) -> Option<&'a str> {
    match params.get(key) {
        Some(Value::String(text)) => Some(text.as_str()),
        _ => None,
    }
}

/// Non-empty segments between double-quote pairs, left to right.
fn quoted_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('"') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('"') else {
            break;
        };
        if close > 0 {
            segments.push(&after[..close]);
        }
        rest = &after[close + 1..];
    }
    segments
}
