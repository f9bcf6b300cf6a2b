use async_graphql::SimpleObject;
use services::validation::ValidationErrors;

#[derive(SimpleObject, Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(SimpleObject, Debug)]
pub struct ValidationErrorType {
    pub message: String,
    pub errors: Vec<FieldError>,
}

impl From<ValidationErrors> for ValidationErrorType {
    fn from(errors: ValidationErrors) -> Self {
        ValidationErrorType {
            message: validation_errors_to_message(&errors),
            errors: field_errors(errors),
        }
    }
}

pub const RECOMMENDATION_NOT_FOUND: &str =
    "No matching recommendation found. Please check your inputs and try again.";

/// Returned when an accepted submission names a concern with no
/// recommendation. Distinct from field validation errors.
#[derive(SimpleObject, Debug)]
pub struct RecommendationNotFound {
    pub concern: String,
    pub message: String,
}

impl RecommendationNotFound {
    pub fn new(concern: String) -> Self {
        RecommendationNotFound {
            concern,
            message: RECOMMENDATION_NOT_FOUND.to_string(),
        }
    }
}

pub(crate) fn validation_errors_to_message(errors: &ValidationErrors) -> String {
    errors
        .values()
        .cloned()
        .collect::<Vec<String>>()
        .join(", ")
}

pub(crate) fn field_errors(errors: ValidationErrors) -> Vec<FieldError> {
    errors
        .into_iter()
        .map(|(field, message)| FieldError {
            field: field.as_str().to_string(),
            message,
        })
        .collect()
}
