use crate::types::recommendation::Recommendation;
use async_graphql::Object;
use services::recommendations;

#[derive(Default)]
pub struct RecommendationQueries;

#[Object]
impl RecommendationQueries {
    /// Treatment suggestion for a concern key, or null if there is none
    async fn recommendation(&self, concern: String) -> Option<Recommendation> {
        recommendations::get_recommendation(&concern)
            .map(|recommendation| Recommendation::new(&concern, recommendation))
    }

    async fn is_valid_concern(&self, concern: String) -> bool {
        recommendations::is_valid_concern(&concern)
    }

    async fn available_concerns(&self) -> Vec<String> {
        recommendations::available_concerns()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;

    #[tokio::test]
    async fn test_recommendation_for_known_concern() {
        let schema = create_test_schema();

        let res = schema
            .execute(Request::new(
                r#"{ recommendation(concern: "wrinkles") { concern title desc } }"#,
            ))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["recommendation"]["concern"], "wrinkles");
        assert_eq!(data["recommendation"]["title"], "Anti-Aging Facial Treatments");
        assert!(data["recommendation"]["desc"]
            .as_str()
            .unwrap()
            .contains("Glo Signature Rejuvenation Facial"));
    }

    #[tokio::test]
    async fn test_recommendation_for_unknown_concern_is_null() {
        let schema = create_test_schema();

        for concern in ["invalid", ""] {
            let query = format!(r#"{{ recommendation(concern: "{}") {{ title }} }}"#, concern);
            let res = schema.execute(Request::new(&query)).await;
            assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

            let data = res.data.into_json().unwrap();
            assert!(data["recommendation"].is_null());
        }
    }

    #[tokio::test]
    async fn test_is_valid_concern() {
        let schema = create_test_schema();

        let res = schema
            .execute(Request::new(
                r#"{ hair: isValidConcern(concern: "hair") nope: isValidConcern(concern: "invalid") }"#,
            ))
            .await;
        let data = res.data.into_json().unwrap();

        assert_eq!(data["hair"], true);
        assert_eq!(data["nope"], false);
    }

    #[tokio::test]
    async fn test_available_concerns_in_catalog_order() {
        let schema = create_test_schema();

        let res = schema.execute(Request::new("{ availableConcerns }")).await;
        let data = res.data.into_json().unwrap();

        assert_eq!(
            data["availableConcerns"],
            serde_json::json!(["wrinkles", "acne", "texture", "hair"])
        );
    }
}
