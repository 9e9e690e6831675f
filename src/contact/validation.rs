use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::fields::{FieldKind, FieldSpec};

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid(&'static str),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_value(value: &str, required: bool, kind: FieldKind) -> Validity {
    let value = value.trim();
    if required && value.is_empty() {
        return Validity::Invalid(REQUIRED_MESSAGE);
    }
    if kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Validity::Invalid(INVALID_EMAIL_MESSAGE);
    }
    Validity::Valid
}

pub fn validate_field(spec: &FieldSpec, value: &str) -> Validity {
    validate_value(value, spec.required, spec.kind)
}

/// Field name to error message, for every field that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAnnotations(BTreeMap<&'static str, &'static str>);

impl FieldAnnotations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }
}

/// Checks every required field plus every email field, without stopping at
/// the first failure.
pub fn validate_form<'a>(
    fields: &[FieldSpec],
    value_of: impl Fn(&str) -> &'a str,
) -> FieldAnnotations {
    let mut annotations = BTreeMap::new();
    for spec in fields {
        if !spec.required && spec.kind != FieldKind::Email {
            continue;
        }
        if let Validity::Invalid(message) = validate_field(spec, value_of(spec.name)) {
            annotations.insert(spec.name, message);
        }
    }
    FieldAnnotations(annotations)
}
