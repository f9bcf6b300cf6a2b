use async_graphql::SimpleObject;
use services::analysis::AnalysisReport;

use super::profile::Profile;
use super::recommendation::Recommendation;
use crate::errors::FieldError;

#[derive(SimpleObject)]
pub struct AnalysisComplete {
    pub recommendation: Recommendation,
    pub profile: Profile,
    pub booking_url: String,
}

impl From<AnalysisReport> for AnalysisComplete {
    fn from(report: AnalysisReport) -> Self {
        AnalysisComplete {
            recommendation: Recommendation::new(&report.concern, report.recommendation),
            profile: report.profile.into(),
            booking_url: report.booking_url,
        }
    }
}

#[derive(SimpleObject)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<FieldError>,
}
