use crate::analysis::{self, AnalysisOutcome};
use crate::config::AnalysisConfig;
use crate::validation::{InputValidator, ValidationErrors, ValidationErrorsExt};
use models::submission::{FieldName, Submission};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    AlreadySubmitting,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::AlreadySubmitting => write!(f, "A submission is already in progress"),
        }
    }
}

/// Read-only view of a session's in-flight flag, e.g. to disable a submit
/// button while the analysis is running.
#[derive(Debug, Clone)]
pub struct SubmittingHandle(Arc<AtomicBool>);

impl SubmittingHandle {
    pub fn is_submitting(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Holds the in-flight flag for the duration of one submit and clears it on
/// drop, also when the submit future is dropped early.
struct InFlight(Arc<AtomicBool>);

impl InFlight {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(Arc::clone(flag)))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One visitor's pass through the analysis form.
pub struct FormSession {
    submission: Submission,
    errors: ValidationErrors,
    outcome: Option<AnalysisOutcome>,
    submitting: Arc<AtomicBool>,
    config: AnalysisConfig,
}

impl FormSession {
    pub fn new(config: AnalysisConfig) -> Self {
        Self::from_submission(Submission::default(), config)
    }

    pub fn from_submission(submission: Submission, config: AnalysisConfig) -> Self {
        FormSession {
            submission,
            errors: ValidationErrors::new(),
            outcome: None,
            submitting: Arc::new(AtomicBool::new(false)),
            config,
        }
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// The result currently on display, if the form has been submitted.
    pub fn outcome(&self) -> Option<&AnalysisOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub fn submitting_handle(&self) -> SubmittingHandle {
        SubmittingHandle(Arc::clone(&self.submitting))
    }

    /// Stores a new value and drops the error previously shown for that
    /// field. Other fields keep their errors until they are edited too.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.submission.set(field, value);
        self.errors.clear_field(field);
    }

    /// Validates the form and, when it is acceptable, waits the configured
    /// delay before resolving the recommendation.
    ///
    /// Any result on display is withdrawn first. Rejected submissions return
    /// immediately with their errors, which are also kept on the session for
    /// display.
    pub async fn submit(&mut self) -> Result<AnalysisOutcome, SubmitError> {
        let _in_flight = InFlight::acquire(&self.submitting).ok_or(SubmitError::AlreadySubmitting)?;
        self.outcome = None;

        if let Err(errors) = self.submission.validate(self.config.selection_policy) {
            tracing::debug!(fields = ?errors.keys().collect::<Vec<_>>(), "submission rejected");
            self.errors = errors.clone();
            return Ok(AnalysisOutcome::Invalid(errors));
        }
        self.errors.clear();

        tokio::time::sleep(self.config.submission_delay).await;

        let outcome = analysis::resolve(&self.submission, &self.config.booking_url);
        self.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Leaves the result view but keeps what was entered.
    pub fn try_again(&mut self) {
        self.outcome = None;
    }

    /// Starts over with an empty form.
    pub fn reset(&mut self) {
        self.submission = Submission::default();
        self.errors.clear();
        self.outcome = None;
    }
}
