//! Declarative per-field validation rules
//!
//! Rules are checked synchronously against the current form state; the
//! result is a list of violations, never an error. Matching the usual
//! form-validation convention, every rule except `Required` and `SameAs`
//! passes on an empty value - emptiness itself is only an error when the
//! field is required.

use crate::record::FieldMap;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// A single validation rule attached to a form field
#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Pattern(Regex),
    /// Cross-field equality against another field of the same form
    SameAs(&'static str),
}

/// Why a field failed, with enough detail to render a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Required,
    MinLength { min: usize, actual: usize },
    MaxLength { max: usize, actual: usize },
    Email,
    Pattern,
    SameAs { other: String },
}

/// A violation tied to the field it occurred on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub violation: Violation,
}

/// Outcome of validating a whole form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Violations for a single field, in rule order
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldViolation> {
        self.violations.iter().filter(move |v| v.field == field)
    }

    pub fn push(&mut self, field: impl Into<String>, violation: Violation) {
        self.violations.push(FieldViolation {
            field: field.into(),
            violation,
        });
    }
}

/// Check one field's rules against the form state
pub fn check_field(field: &str, rules: &[Rule], state: &FieldMap) -> Vec<FieldViolation> {
    let value = state.get(field);
    rules
        .iter()
        .filter_map(|rule| check(rule, value, state))
        .map(|violation| FieldViolation {
            field: field.to_string(),
            violation,
        })
        .collect()
}

fn check(rule: &Rule, value: Option<&Value>, state: &FieldMap) -> Option<Violation> {
    match rule {
        Rule::Required => is_empty_value(value).then_some(Violation::Required),
        Rule::MinLength(min) => {
            let actual = text_of(value)?.chars().count();
            (actual < *min).then_some(Violation::MinLength {
                min: *min,
                actual,
            })
        }
        Rule::MaxLength(max) => {
            let actual = text_of(value)?.chars().count();
            (actual > *max).then_some(Violation::MaxLength {
                max: *max,
                actual,
            })
        }
        Rule::Email => {
            let text = text_of(value)?;
            (!email_regex().is_match(text)).then_some(Violation::Email)
        }
        Rule::Pattern(regex) => {
            let text = text_of(value)?;
            (!regex.is_match(text)).then_some(Violation::Pattern)
        }
        Rule::SameAs(other) => {
            let left = value.cloned().unwrap_or(Value::Null);
            let right = state.get(*other).cloned().unwrap_or(Value::Null);
            (left != right).then_some(Violation::SameAs {
                other: other.to_string(),
            })
        }
    }
}

/// Non-empty text content, if any; non-string values skip text rules
fn text_of(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text),
        _ => None,
    }
}

fn is_empty_value(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null)) || matches!(value, Some(Value::String(s)) if s.is_empty())
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"))
}

/// Pattern used by realm names: letters, digits, hyphen, underscore
pub fn name_pattern() -> Regex {
    static NAME: OnceLock<Regex> = OnceLock::new();
    NAME.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid name regex"))
        .clone()
}
