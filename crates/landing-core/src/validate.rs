//! Form Validation
//!
//! Required-presence checks for the name fields and fixed patterns for
//! email and ZIP. Pure functions, no side effects.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::field::{Field, LeadFields};

/// Why a single field was rejected
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    #[error("{}", required_message(.0))]
    Required(Field),

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Please enter a valid ZIP code")]
    InvalidZip,
}

const fn required_message(field: &Field) -> &'static str {
    match *field {
        Field::FirstName => "First name is required",
        Field::LastName => "Last name is required",
        Field::Email => "Email is required",
        Field::Zip => "ZIP code is required",
        Field::CompanyName => "Company name is required",
    }
}

/// Field-to-error mapping, iterated in field order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(f, e)| (*f, e))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.fields().map(Field::name).collect();
        write!(f, "{} invalid field(s): {}", self.len(), names.join(", "))
    }
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("valid email regex"))
}

fn zip_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{5}(-[0-9]{4})?$").expect("valid zip regex"))
}

/// Whitespace as the browser's `String.prototype.trim` sees it, which adds
/// the byte order mark to Unicode `White_Space`
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}').is_empty()
}

/// Validate a single field value
///
/// Presence is checked on the trimmed value, patterns on the raw one, so
/// `" a@b.com"` is present but not a valid email.
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    if field.is_required() && is_blank(value) {
        return Some(FieldError::Required(field));
    }

    match field {
        Field::Email if !email_pattern().is_match(value) => Some(FieldError::InvalidEmail),
        Field::Zip if !zip_pattern().is_match(value) => Some(FieldError::InvalidZip),
        _ => None,
    }
}

/// Validate every field, returning an error for each one that fails
pub fn validate(fields: &LeadFields) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        if let Some(error) = validate_field(field, fields.get(field)) {
            errors.insert(field, error);
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> LeadFields {
        LeadFields::new()
            .with(Field::FirstName, "Ada")
            .with(Field::LastName, "Lovelace")
            .with(Field::Email, "ada@example.com")
            .with(Field::Zip, "12345")
    }

    #[test]
    fn test_empty_form_flags_every_required_field() {
        let errors = validate(&LeadFields::new());
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::FirstName), Some(&FieldError::Required(Field::FirstName)));
        assert_eq!(errors.get(Field::LastName), Some(&FieldError::Required(Field::LastName)));
        assert_eq!(errors.get(Field::Email), Some(&FieldError::Required(Field::Email)));
        assert_eq!(errors.get(Field::Zip), Some(&FieldError::Required(Field::Zip)));
        assert!(!errors.contains(Field::CompanyName));
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_fields()).is_empty());
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        assert_eq!(
            validate_field(Field::FirstName, "   "),
            Some(FieldError::Required(Field::FirstName))
        );
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        assert_eq!(
            validate_field(Field::FirstName, "\u{FEFF}"),
            Some(FieldError::Required(Field::FirstName))
        );
        assert_eq!(validate_field(Field::LastName, " \u{FEFF}\t"), Some(FieldError::Required(Field::LastName)));
        assert_eq!(validate_field(Field::Email, "a\u{FEFF}@b.com"), Some(FieldError::InvalidEmail));
        assert_eq!(validate_field(Field::FirstName, "\u{FEFF}Ada"), None);
    }

    #[test]
    fn test_email_pattern() {
        assert_eq!(validate_field(Field::Email, "a@b"), Some(FieldError::InvalidEmail));
        assert_eq!(validate_field(Field::Email, "a b@c.com"), Some(FieldError::InvalidEmail));
        assert_eq!(validate_field(Field::Email, "@b.com"), Some(FieldError::InvalidEmail));
        assert_eq!(validate_field(Field::Email, " a@b.com"), Some(FieldError::InvalidEmail));
        assert_eq!(validate_field(Field::Email, "a@b.com"), None);
        assert_eq!(validate_field(Field::Email, "first.last@sub.example.co"), None);
    }

    #[test]
    fn test_zip_pattern() {
        assert_eq!(validate_field(Field::Zip, "1234"), Some(FieldError::InvalidZip));
        assert_eq!(validate_field(Field::Zip, "123456"), Some(FieldError::InvalidZip));
        assert_eq!(validate_field(Field::Zip, "12345-678"), Some(FieldError::InvalidZip));
        assert_eq!(validate_field(Field::Zip, "abcde"), Some(FieldError::InvalidZip));
        assert_eq!(validate_field(Field::Zip, "12345"), None);
        assert_eq!(validate_field(Field::Zip, "12345-6789"), None);
    }

    #[test]
    fn test_zip_rejects_non_ascii_digits() {
        // Arabic-Indic digits
        assert_eq!(validate_field(Field::Zip, "١٢٣٤٥"), Some(FieldError::InvalidZip));
    }

    #[test]
    fn test_company_is_never_an_error() {
        assert_eq!(validate_field(Field::CompanyName, ""), None);
        assert_eq!(validate_field(Field::CompanyName, "Acme"), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(FieldError::Required(Field::Zip).to_string(), "ZIP code is required");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email");
        assert_eq!(FieldError::InvalidZip.to_string(), "Please enter a valid ZIP code");
    }

    #[test]
    fn test_errors_display_in_field_order() {
        let errors = validate(&LeadFields::new().with(Field::Email, "nope"));
        assert_eq!(
            errors.to_string(),
            "4 invalid field(s): first_name, last_name, email, zip"
        );
    }
}
