pub mod field_validators;
pub mod input_validator;
pub mod submission_validator;

// Re-export common types and functions
pub use field_validators::FieldValidator;
pub use input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};
pub use submission_validator::{validate, SelectionPolicy, SubmissionValidator};
