use serde::Serialize;

/// A treatment suggestion shown once the analysis form is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Short treatment category name
    pub title: &'static str,
    /// Educational copy describing the suggested treatments
    pub desc: &'static str,
}
