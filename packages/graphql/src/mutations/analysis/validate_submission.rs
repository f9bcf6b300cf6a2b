use crate::errors::field_errors;
use crate::mutations::input_validators::SkinAnalysisInput;
use crate::types::analysis::ValidationReport;
use async_graphql::{Context, Result};
use services::validation::input_validator::InputValidator;
use services::AnalysisConfig;

pub(super) async fn validate_submission(
    ctx: &Context<'_>,
    input: SkinAnalysisInput,
) -> Result<ValidationReport> {
    let config = ctx.data::<AnalysisConfig>()?;

    Ok(match input.validate(config.selection_policy) {
        Ok(()) => ValidationReport {
            valid: true,
            errors: Vec::new(),
        },
        Err(validation_errors) => ValidationReport {
            valid: false,
            errors: field_errors(validation_errors),
        },
    })
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;

    #[tokio::test]
    async fn test_valid_input_reports_no_errors() {
        let schema = create_test_schema();
        let query = format!(
            "mutation {{ validateSubmission(input: {}) {{ valid errors {{ field message }} }} }}",
            analysis_input("John Doe", "john@example.com", "oily", "acne")
        );

        let res = schema.execute(Request::new(&query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();

        assert_eq!(data["validateSubmission"]["valid"], true);
        assert_eq!(data["validateSubmission"]["errors"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_empty_input_reports_every_required_field() {
        let schema = create_test_schema();
        let query = format!(
            "mutation {{ validateSubmission(input: {}) {{ valid errors {{ field message }} }} }}",
            analysis_input("", "", "", "")
        );

        let res = schema.execute(Request::new(&query)).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["validateSubmission"]["valid"], false);
        assert_eq!(
            data["validateSubmission"]["errors"],
            serde_json::json!([
                { "field": "name", "message": "Name is required" },
                { "field": "email", "message": "Email is required" },
                { "field": "skinType", "message": "Please select your skin type" },
                { "field": "concern", "message": "Please select your primary concern" },
            ])
        );
    }

    #[tokio::test]
    async fn test_strict_schema_checks_selection_membership() {
        let query = format!(
            "mutation {{ validateSubmission(input: {}) {{ valid errors {{ field }} }} }}",
            analysis_input("John Doe", "john@example.com", "oily", "invalid")
        );

        let res = create_test_schema().execute(Request::new(&query)).await;
        let data = res.data.into_json().unwrap();
        assert_eq!(data["validateSubmission"]["valid"], true);

        let res = create_strict_test_schema().execute(Request::new(&query)).await;
        let data = res.data.into_json().unwrap();
        assert_eq!(data["validateSubmission"]["valid"], false);
        assert_eq!(
            data["validateSubmission"]["errors"],
            serde_json::json!([{ "field": "concern" }])
        );
    }
}
