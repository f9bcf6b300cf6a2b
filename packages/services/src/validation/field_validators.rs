use super::input_validator::{ValidationErrors, ValidationErrorsExt};
use models::submission::FieldName;
use once_cell::sync::Lazy;
use regex::Regex;

// `\s` does not cover U+FEFF
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").expect("Invalid regex pattern")
});

fn is_form_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}

pub struct FieldValidator;

impl FieldValidator {
    pub fn is_email_shaped(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email)
    }

    /// Blank is reported as `required`; anything else is matched untrimmed
    /// against the `local@domain.tld` shape.
    pub fn validate_email(email: &str, required: &str, malformed: &str, errors: &mut ValidationErrors) {
        if is_blank(email) {
            errors.add_error(FieldName::Email, required);
            return;
        }

        if !Self::is_email_shaped(email) {
            errors.add_error(FieldName::Email, malformed);
        }
    }

    pub fn validate_required_string(
        value: &str,
        field: FieldName,
        message: &str,
        errors: &mut ValidationErrors,
    ) {
        if is_blank(value) {
            errors.add_error(field, message);
        }
    }

    /// Choice fields are only blank when nothing was picked, so whitespace
    /// counts as a selection here.
    pub fn validate_required_selection(
        value: &str,
        field: FieldName,
        message: &str,
        errors: &mut ValidationErrors,
    ) {
        if value.is_empty() {
            errors.add_error(field, message);
        }
    }

    pub fn validate_selection_member(
        value: &str,
        field: FieldName,
        message: &str,
        is_member: impl Fn(&str) -> bool,
        errors: &mut ValidationErrors,
    ) {
        if !value.is_empty() && !is_member(value) {
            errors.add_error(field, message);
        }
    }
}
