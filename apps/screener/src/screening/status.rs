use crate::models::evaluation::HiringStatus;

pub const SHORTLIST_THRESHOLD: i64 = 80;
pub const SCREENED_THRESHOLD: i64 = 60;

/// Score cut-offs for the hiring status. Process-wide, never per job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusThresholds {
    pub shortlist: i64,
    pub screened: i64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            shortlist: SHORTLIST_THRESHOLD,
            screened: SCREENED_THRESHOLD,
        }
    }
}

/// Maps a score to a hiring status.
///
/// score ≥ shortlist → Shortlisted; screened ≤ score < shortlist → Screened;
/// lower → Rejected. A missing score is Screened so unparseable model output
/// never eliminates a candidate on its own.
pub fn classify(score: Option<i64>, thresholds: &StatusThresholds) -> HiringStatus {
    match score {
        None => HiringStatus::Screened,
        Some(s) if s >= thresholds.shortlist => HiringStatus::Shortlisted,
        Some(s) if s >= thresholds.screened => HiringStatus::Screened,
        Some(_) => HiringStatus::Rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_default(score: Option<i64>) -> HiringStatus {
        classify(score, &StatusThresholds::default())
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_default(Some(80)), HiringStatus::Shortlisted);
        assert_eq!(classify_default(Some(79)), HiringStatus::Screened);
        assert_eq!(classify_default(Some(60)), HiringStatus::Screened);
        assert_eq!(classify_default(Some(59)), HiringStatus::Rejected);
    }

    #[test]
    fn test_absent_score_is_screened() {
        assert_eq!(classify_default(None), HiringStatus::Screened);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify_default(Some(100)), HiringStatus::Shortlisted);
        assert_eq!(classify_default(Some(0)), HiringStatus::Rejected);
        assert_eq!(classify_default(Some(250)), HiringStatus::Shortlisted);
        assert_eq!(classify_default(Some(-1)), HiringStatus::Rejected);
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = StatusThresholds {
            shortlist: 90,
            screened: 75,
        };
        assert_eq!(classify(Some(85), &strict), HiringStatus::Screened);
        assert_eq!(classify(Some(70), &strict), HiringStatus::Rejected);
        assert_eq!(classify(Some(90), &strict), HiringStatus::Shortlisted);
    }
}
