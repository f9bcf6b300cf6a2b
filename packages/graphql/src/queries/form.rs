use crate::types::form_option::FormOption;
use async_graphql::{Context, Object, Result};
use models::choices::{Concern, SkinType};
use services::AnalysisConfig;

#[derive(Default)]
pub struct FormQueries;

#[Object]
impl FormQueries {
    /// Choices for the skin type field, in display order
    async fn skin_type_options(&self) -> Vec<FormOption> {
        SkinType::ALL.into_iter().map(FormOption::from).collect()
    }

    /// Choices for the primary concern field, in display order
    async fn concern_options(&self) -> Vec<FormOption> {
        Concern::ALL.into_iter().map(FormOption::from).collect()
    }

    /// Where the "book a consultation" call to action points
    async fn booking_url(&self, ctx: &Context<'_>) -> Result<String> {
        let config = ctx.data::<AnalysisConfig>()?;
        Ok(config.booking_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;

    #[tokio::test]
    async fn test_form_options() {
        let schema = create_test_schema();

        let res = schema
            .execute(Request::new(
                "{ skinTypeOptions { value label } concernOptions { value label } }",
            ))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);
        let data = res.data.into_json().unwrap();

        let skin_types = data["skinTypeOptions"].as_array().unwrap();
        assert_eq!(skin_types.len(), 4);
        assert_eq!(skin_types[2]["value"], "combo");
        assert_eq!(skin_types[2]["label"], "Combination");

        let concerns = data["concernOptions"].as_array().unwrap();
        let values: Vec<_> = concerns.iter().map(|c| c["value"].as_str().unwrap()).collect();
        assert_eq!(values, vec!["acne", "wrinkles", "texture", "hair"]);
    }

    #[tokio::test]
    async fn test_booking_url_comes_from_config() {
        let schema = create_test_schema();

        let res = schema.execute(Request::new("{ bookingUrl }")).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["bookingUrl"], TEST_BOOKING_URL);
    }
}
