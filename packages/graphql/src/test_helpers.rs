use std::time::Duration;

use services::validation::SelectionPolicy;
use services::AnalysisConfig;

use crate::{build_schema, AnalysisSchema};

pub const TEST_BOOKING_URL: &str = "https://thegloalchemist.com/book";

pub fn test_config() -> AnalysisConfig {
    AnalysisConfig {
        booking_url: TEST_BOOKING_URL.to_string(),
        submission_delay: Duration::ZERO,
        selection_policy: SelectionPolicy::Permissive,
    }
}

pub fn create_test_schema() -> AnalysisSchema {
    build_schema(test_config())
}

pub fn create_strict_test_schema() -> AnalysisSchema {
    build_schema(AnalysisConfig {
        selection_policy: SelectionPolicy::Strict,
        ..test_config()
    })
}

/// Builds the `input: {...}` argument for an analysis mutation.
pub fn analysis_input(name: &str, email: &str, skin_type: &str, concern: &str) -> String {
    format!(
        r#"{{ name: "{}", email: "{}", skinType: "{}", concern: "{}" }}"#,
        name, email, skin_type, concern
    )
}
