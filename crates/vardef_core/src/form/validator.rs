//! Submit-time validation of the edit form.
//!
//! # Responsibility
//! - Check every field against its rules and collect inline messages.
//! - Produce typed values for the save request on success.
//!
//! # Invariants
//! - Runs only on submit; never on blur, keyup or click.
//! - Rules apply in order `required`, `number`, `positive`; the first failing
//!   rule is the one reported for a field.
//! - `positive` accepts one or more ASCII digits, so zero passes.

use crate::form::fields::{FormField, FormFields};
use crate::model::attributes::VarAttributes;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:-?\d+|-?\d{1,3}(?:,\d{3})+)?(?:\.\d+)?$").expect("valid number regex")
});
static POSITIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid positive regex"));

/// Validation rule that rejected a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    Number,
    Positive,
}

impl FieldRule {
    /// Inline message shown next to the field.
    pub fn message(self) -> &'static str {
        match self {
            Self::Required => "This field is required.",
            Self::Number => "Value must be a number.",
            Self::Positive => "Value must be a positive integer.",
        }
    }
}

/// Per-field validation failures, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FormField, FieldRule>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FormField) -> Option<FieldRule> {
        self.errors.get(&field).copied()
    }

    /// Inline message for `field`, if it failed.
    pub fn message(&self, field: FormField) -> Option<&'static str> {
        self.get(field).map(FieldRule::message)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldRule)> + '_ {
        self.errors.iter().map(|(field, rule)| (*field, *rule))
    }

    fn insert(&mut self, field: FormField, rule: FieldRule) {
        self.errors.insert(field, rule);
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "form validation failed:")?;
        for (field, rule) in self.iter() {
            write!(f, " {}: {}", field.wire_key(), rule.message())?;
        }
        Ok(())
    }
}

impl Error for FieldErrors {}

/// Form content that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedFields {
    pub var_type: String,
    pub unit: String,
    pub threshold: u64,
    pub ttl: u64,
}

impl ValidatedFields {
    pub fn into_attributes(self) -> VarAttributes {
        VarAttributes {
            var_type: self.var_type,
            unit: self.unit,
            threshold: self.threshold,
            ttl: self.ttl,
        }
    }
}

/// Validates the whole form.
///
/// All four fields are required; `threshold` and `ttl` must also be
/// non-negative integers.
pub fn validate(fields: &FormFields) -> Result<ValidatedFields, FieldErrors> {
    let mut errors = FieldErrors::default();

    for field in [FormField::VarType, FormField::Unit] {
        if let Err(rule) = check_text(fields.get(field)) {
            errors.insert(field, rule);
        }
    }

    let threshold = match check_count(fields.get(FormField::Threshold)) {
        Ok(value) => Some(value),
        Err(rule) => {
            errors.insert(FormField::Threshold, rule);
            None
        }
    };
    let ttl = match check_count(fields.get(FormField::Ttl)) {
        Ok(value) => Some(value),
        Err(rule) => {
            errors.insert(FormField::Ttl, rule);
            None
        }
    };

    match (threshold, ttl) {
        (Some(threshold), Some(ttl)) if errors.is_empty() => Ok(ValidatedFields {
            var_type: fields.var_type.clone(),
            unit: fields.unit.clone(),
            threshold,
            ttl,
        }),
        _ => Err(errors),
    }
}

fn check_text(value: &str) -> Result<(), FieldRule> {
    if value.trim().is_empty() {
        return Err(FieldRule::Required);
    }
    Ok(())
}

fn check_count(value: &str) -> Result<u64, FieldRule> {
    check_text(value)?;
    if !NUMBER_RE.is_match(value) {
        return Err(FieldRule::Number);
    }
    if !POSITIVE_RE.is_match(value) {
        return Err(FieldRule::Positive);
    }
    // Digits only at this point; overflow is the sole parse failure.
    value.parse::<u64>().map_err(|_| FieldRule::Number)
}
