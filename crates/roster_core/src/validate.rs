//! Field and form validation rules.
//!
//! # Responsibility
//! - Decide validity of one field value by its wire name.
//! - Aggregate every failing field of a form in one pass.
//!
//! # Invariants
//! - Validation is pure and deterministic; failures are returned as data.
//! - `Required` always takes precedence over `Invalid`.
//! - Unknown field names are always valid.

use crate::i18n::Translator;
use crate::model::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9\s\-()]{10,}$").expect("valid phone regex"));

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldErrorKind {
    /// Empty or whitespace-only value.
    Required,
    /// Present but malformed value.
    Invalid,
}

/// One rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldError {
    pub field: Field,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub const fn required(field: Field) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Required,
        }
    }

    pub const fn invalid(field: Field) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Invalid,
        }
    }

    /// Translation key for this error, e.g. `emailInvalid`.
    pub fn message_key(&self) -> String {
        let suffix = match self.kind {
            FieldErrorKind::Required => "Required",
            FieldErrorKind::Invalid => "Invalid",
        };
        format!("{}{suffix}", self.field.as_str())
    }

    pub fn message(&self, translator: &dyn Translator) -> String {
        translator.t(&self.message_key(), &[])
    }
}

/// Failing fields of one form, keyed by field.
///
/// Empty means the form is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field, error);
    }

    /// Removes the error for a wire name. Returns whether one was present.
    pub fn clear(&mut self, name: &str) -> bool {
        match Field::parse(name) {
            Some(field) => self.errors.remove(&field).is_some(),
            None => false,
        }
    }

    /// Looks up the error for a wire name.
    pub fn get(&self, name: &str) -> Option<&FieldError> {
        Field::parse(name).and_then(|field| self.errors.get(&field))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.values()
    }

    /// Renders every error through the translator, keyed by wire name.
    pub fn messages(&self, translator: &dyn Translator) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), error.message(translator)))
            .collect()
    }
}

impl FromIterator<FieldError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

/// Validates one field by wire name.
///
/// Returns `None` for valid values and for unknown field names.
pub fn validate_field(name: &str, value: &str) -> Option<FieldError> {
    let field = Field::parse(name)?;
    if is_blank(value) {
        return Some(FieldError::required(field));
    }

    let valid = match field {
        Field::Email => EMAIL_RE.is_match(value),
        Field::Phone => PHONE_RE.is_match(value),
        Field::Salary => parse_salary(value).is_some(),
        Field::FirstName
        | Field::LastName
        | Field::Department
        | Field::Position
        | Field::StartDate
        | Field::BirthDate => true,
    };

    if valid {
        None
    } else {
        Some(FieldError::invalid(field))
    }
}

/// Validates every `(name, value)` pair and keeps only the failures.
pub fn validate_form<'a, I>(values: I) -> ValidationErrors
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    values
        .into_iter()
        .filter_map(|(name, value)| validate_field(name, value))
        .collect()
}

/// Parses a salary amount. Only finite values above zero are accepted.
pub fn parse_salary(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
