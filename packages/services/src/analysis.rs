use crate::logging::SanitizedEmail;
use crate::recommendations::get_recommendation;
use crate::validation::{SubmissionValidator, ValidationErrors};
use models::prelude::*;
use serde::Serialize;

/// What the visitor sees after an accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub concern: String,
    pub recommendation: &'static Recommendation,
    /// Echo of the submitted profile.
    pub profile: Submission,
    pub booking_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Some fields failed validation; nothing was looked up.
    Invalid(ValidationErrors),
    Recommended(AnalysisReport),
    /// The submission was accepted but its concern is not in the catalog.
    NoMatch { concern: String },
}

impl AnalysisOutcome {
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisOutcome::Recommended(report) => Some(report),
            _ => None,
        }
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            AnalysisOutcome::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Validates the submission and, if it is acceptable, resolves its concern.
pub fn analyze(
    submission: &Submission,
    validator: &SubmissionValidator,
    booking_url: &str,
) -> AnalysisOutcome {
    let errors = validator.validate(submission);
    if !errors.is_empty() {
        tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "submission rejected");
        return AnalysisOutcome::Invalid(errors);
    }

    resolve(submission, booking_url)
}

/// Resolves an already-validated submission.
pub fn resolve(submission: &Submission, booking_url: &str) -> AnalysisOutcome {
    match get_recommendation(&submission.concern) {
        Some(recommendation) => {
            tracing::info!(
                concern = %submission.concern,
                email = %SanitizedEmail::new(&submission.email),
                "analysis complete"
            );
            AnalysisOutcome::Recommended(AnalysisReport {
                concern: submission.concern.clone(),
                recommendation,
                profile: submission.clone(),
                booking_url: booking_url.to_string(),
            })
        }
        None => AnalysisOutcome::NoMatch {
            concern: submission.concern.clone(),
        },
    }
}
