use super::field_validators::FieldValidator;
use super::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};
use models::prelude::*;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const SKIN_TYPE_REQUIRED: &str = "Please select your skin type";
pub const CONCERN_REQUIRED: &str = "Please select your primary concern";

/// How strictly the choice fields (`skinType`, `concern`) are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Any non-empty value is accepted; the form's option lists keep values
    /// in range.
    #[default]
    Permissive,
    /// Non-empty values must also be one of the offered options.
    Strict,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionValidator {
    policy: SelectionPolicy,
}

impl SubmissionValidator {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Checks every field independently and returns the failures.
    ///
    /// Free-text fields (`outcome`, `routine`, `condition`) are never
    /// reported.
    pub fn validate(&self, submission: &Submission) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        FieldValidator::validate_required_string(&submission.name, FieldName::Name, NAME_REQUIRED, &mut errors);
        FieldValidator::validate_email(&submission.email, EMAIL_REQUIRED, EMAIL_INVALID, &mut errors);
        FieldValidator::validate_required_selection(
            &submission.skin_type,
            FieldName::SkinType,
            SKIN_TYPE_REQUIRED,
            &mut errors,
        );
        FieldValidator::validate_required_selection(
            &submission.concern,
            FieldName::Concern,
            CONCERN_REQUIRED,
            &mut errors,
        );

        if self.policy == SelectionPolicy::Strict {
            FieldValidator::validate_selection_member(
                &submission.skin_type,
                FieldName::SkinType,
                SKIN_TYPE_REQUIRED,
                |v| SkinType::from_value(v).is_some(),
                &mut errors,
            );
            FieldValidator::validate_selection_member(
                &submission.concern,
                FieldName::Concern,
                CONCERN_REQUIRED,
                |v| Concern::from_value(v).is_some(),
                &mut errors,
            );
        }

        errors
    }
}

/// Validates with the permissive selection policy.
pub fn validate(submission: &Submission) -> ValidationErrors {
    SubmissionValidator::default().validate(submission)
}

impl InputValidator for Submission {
    fn validate(&self, policy: SelectionPolicy) -> Result<(), ValidationErrors> {
        SubmissionValidator::new(policy).validate(self).into_result()
    }
}
