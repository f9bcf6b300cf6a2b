use super::submission_validator::SelectionPolicy;
use models::submission::FieldName;
use std::collections::BTreeMap;

/// Failing fields mapped to the message shown next to them.
///
/// A field appears at most once; an empty map means the input is acceptable.
pub type ValidationErrors = BTreeMap<FieldName, String>;

pub trait InputValidator {
    fn validate(&self, policy: SelectionPolicy) -> Result<(), ValidationErrors>;

    fn is_valid(&self, policy: SelectionPolicy) -> bool {
        self.validate(policy).is_ok()
    }
}

// Helper trait for building validation errors
pub trait ValidationErrorsExt {
    /// Records `message` for `field` unless the field already has one.
    fn add_error(&mut self, field: FieldName, message: impl Into<String>);
    fn clear_field(&mut self, field: FieldName) -> Option<String>;
    fn into_result(self) -> Result<(), ValidationErrors>;
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: FieldName, message: impl Into<String>) {
        self.entry(field).or_insert_with(|| message.into());
    }

    fn clear_field(&mut self, field: FieldName) -> Option<String> {
        self.remove(&field)
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
