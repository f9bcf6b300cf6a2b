use super::AnalysisResult;
use crate::errors::{RecommendationNotFound, ValidationErrorType};
use crate::mutations::input_validators::SkinAnalysisInput;
use async_graphql::{Context, Error, Result};
use services::analysis::AnalysisOutcome;
use services::session::FormSession;
use services::AnalysisConfig;

pub(super) async fn submit_analysis(
    ctx: &Context<'_>,
    input: SkinAnalysisInput,
) -> Result<AnalysisResult> {
    let config = ctx.data::<AnalysisConfig>()?;
    let mut session = FormSession::from_submission(input.into(), config.clone());

    let outcome = session
        .submit()
        .await
        .map_err(|e| Error::new(e.to_string()))?;

    Ok(match outcome {
        AnalysisOutcome::Recommended(report) => AnalysisResult::AnalysisComplete(report.into()),
        AnalysisOutcome::Invalid(errors) => AnalysisResult::ValidationError(ValidationErrorType::from(errors)),
        AnalysisOutcome::NoMatch { concern } => {
            AnalysisResult::RecommendationNotFound(RecommendationNotFound::new(concern))
        }
    })
}
