use tracing::debug;

use crate::model::{AssessmentColumn, AssessmentSummary, InvalidInput, PerformanceCriteria};

pub fn compute_summaries(
    columns: &[AssessmentColumn],
    criteria: &PerformanceCriteria,
) -> Result<Vec<AssessmentSummary>, InvalidInput> {
    let mut summaries = Vec::with_capacity(columns.len());

    for column in columns {
        if let Some(score) = column.scores.iter().flatten().find(|s| !s.is_finite()) {
            return Err(InvalidInput(format!(
                "assessment {:?} contains a non-numeric score: {score}",
                column.name
            )));
        }

        let valid = column.valid_scores();
        if valid.is_empty() {
            debug!("skipping assessment {:?}: no valid scores", column.name);
            continue;
        }

        let pct = pct_at_or_above(&valid, criteria.threshold);
        summaries.push(AssessmentSummary {
            assessment: column.name.clone(),
            n: valid.len(),
            mean: mean(&valid),
            median: median(&valid),
            pct_at_or_above: pct,
            status: criteria.classify(pct),
        });
    }

    Ok(summaries)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

pub fn pct_at_or_above(values: &[f64], threshold: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let at_or_above = values.iter().filter(|&&v| v >= threshold).count();
    100.0 * at_or_above as f64 / values.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/analyze.rs"]
mod tests;
