use serde::Serialize;

use crate::model::status::AttainmentStatus;

// Full precision; rounding happens at render time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentSummary {
    pub assessment: String,
    pub n: usize,
    pub mean: f64,
    pub median: f64,
    pub pct_at_or_above: f64,
    pub status: AttainmentStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub met: usize,
    pub partially_met: usize,
    pub not_met: usize,
}

impl StatusCounts {
    pub fn tally(summaries: &[AssessmentSummary]) -> Self {
        let mut counts = StatusCounts::default();
        for summary in summaries {
            match summary.status {
                AttainmentStatus::Met => counts.met += 1,
                AttainmentStatus::PartiallyMet => counts.partially_met += 1,
                AttainmentStatus::NotMet => counts.not_met += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.met + self.partially_met + self.not_met
    }

    pub fn get(&self, status: AttainmentStatus) -> usize {
        match status {
            AttainmentStatus::Met => self.met,
            AttainmentStatus::PartiallyMet => self.partially_met,
            AttainmentStatus::NotMet => self.not_met,
        }
    }
}
