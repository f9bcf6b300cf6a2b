use crate::validation::SelectionPolicy;
use std::time::Duration;

pub const DEFAULT_BOOKING_URL: &str = "https://thegloalchemist.com/book";
pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_millis(500);

/// Settings for the analysis flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Booking page linked from a result. Passed through verbatim.
    pub booking_url: String,
    /// How long an accepted submission waits before its result is revealed.
    pub submission_delay: Duration,
    pub selection_policy: SelectionPolicy,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            booking_url: DEFAULT_BOOKING_URL.to_string(),
            submission_delay: DEFAULT_SUBMISSION_DELAY,
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let booking_url = lookup("BOOKING_URL")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BOOKING_URL.to_string());
        let submission_delay = lookup("SUBMISSION_DELAY_MS")
            .and_then(|ms| ms.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SUBMISSION_DELAY);
        let selection_policy = match lookup("STRICT_SELECTIONS").as_deref().map(str::trim) {
            Some("1") | Some("true") | Some("TRUE") | Some("yes") => SelectionPolicy::Strict,
            _ => SelectionPolicy::Permissive,
        };

        AnalysisConfig {
            booking_url,
            submission_delay,
            selection_policy,
        }
    }
}
