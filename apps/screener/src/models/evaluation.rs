use std::fmt;

use serde::{Deserialize, Serialize};

/// Recommendation labels the model is asked to choose from.
pub const RECOMMENDATIONS: [&str; 4] = ["Strong Fit", "Good Fit", "Needs Development", "Not a Fit"];

/// Used whenever the model's recommendation is unusable.
pub const DEFAULT_RECOMMENDATION: &str = "Needs Development";

/// Normalized output of one model evaluation. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub score: Option<i64>,
    pub summary: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendation: String,
    /// Original model text, kept only when it could not be parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
}

/// Hiring outcome computed locally from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiringStatus {
    Shortlisted,
    Screened,
    Rejected,
}

impl HiringStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HiringStatus::Shortlisted => "Shortlisted",
            HiringStatus::Screened => "Screened",
            HiringStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for HiringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the results document; only emitted for applicants that were evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub name: String,
    pub email: String,
    pub job_id: String,
    pub score: Option<i64>,
    pub summary: String,
    pub strengths: Vec<String>,
    pub gaps: Vec<String>,
    pub recommendation: String,
    pub status: HiringStatus,
}
