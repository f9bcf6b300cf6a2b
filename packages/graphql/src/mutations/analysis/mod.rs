use crate::errors::{RecommendationNotFound, ValidationErrorType};
use crate::mutations::input_validators::SkinAnalysisInput;
use crate::types::analysis::{AnalysisComplete, ValidationReport};
use async_graphql::{Context, Object, Result, Union};

mod submit_analysis;
mod validate_submission;

#[derive(Union)]
pub enum AnalysisResult {
    AnalysisComplete(AnalysisComplete),
    ValidationError(ValidationErrorType),
    RecommendationNotFound(RecommendationNotFound),
}

#[derive(Default)]
pub struct AnalysisMutation;

#[Object]
impl AnalysisMutation {
    /// Checks the form without producing a recommendation
    async fn validate_submission(
        &self,
        ctx: &Context<'_>,
        input: SkinAnalysisInput,
    ) -> Result<ValidationReport> {
        validate_submission::validate_submission(ctx, input).await
    }

    /// Validates the form and, once accepted, returns the matching
    /// recommendation after the configured delay
    async fn submit_analysis(
        &self,
        ctx: &Context<'_>,
        input: SkinAnalysisInput,
    ) -> Result<AnalysisResult> {
        submit_analysis::submit_analysis(ctx, input).await
    }
}
