use serde::Serialize;
use thiserror::Error;

use crate::model::status::AttainmentStatus;

// Band below the target, in percentage points.
pub const PARTIAL_BAND: f64 = 10.0;

pub const THRESHOLD_MAX: f64 = 1000.0;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid input: {0}")]
pub struct InvalidInput(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceCriteria {
    pub threshold: f64,
    pub target_pct: u8,
}

impl PerformanceCriteria {
    pub fn new(threshold: f64, target_pct: u8) -> Result<Self, InvalidInput> {
        if !threshold.is_finite() || !(0.0..=THRESHOLD_MAX).contains(&threshold) {
            return Err(InvalidInput(format!(
                "threshold must be a number in [0, {THRESHOLD_MAX:.0}], got {threshold}"
            )));
        }
        if target_pct > 100 {
            return Err(InvalidInput(format!(
                "target percentage must be in [0, 100], got {target_pct}"
            )));
        }
        Ok(Self {
            threshold,
            target_pct,
        })
    }

    pub fn classify(&self, pct_at_or_above: f64) -> AttainmentStatus {
        let target = f64::from(self.target_pct);
        if pct_at_or_above >= target {
            AttainmentStatus::Met
        } else if pct_at_or_above >= (target - PARTIAL_BAND).max(0.0) {
            AttainmentStatus::PartiallyMet
        } else {
            AttainmentStatus::NotMet
        }
    }
}
