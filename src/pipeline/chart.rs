use serde::Serialize;

use crate::model::{AssessmentColumn, AssessmentSummary, PerformanceCriteria};

// Rendering happens in whatever consumes chart.json.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    #[serde(rename = "box")]
    BoxPlot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    Bar {
        labels: Vec<String>,
        values: Vec<f64>,
        target_pct: u8,
    },
    #[serde(rename = "box")]
    BoxPlot {
        series: Vec<BoxSeries>,
        threshold: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSeries {
    pub assessment: String,
    pub values: Vec<f64>,
}

// Fully-missing columns appear in neither variant.
pub fn build_chart_data(
    kind: ChartKind,
    columns: &[AssessmentColumn],
    summaries: &[AssessmentSummary],
    criteria: &PerformanceCriteria,
) -> ChartData {
    match kind {
        ChartKind::Bar => ChartData::Bar {
            labels: summaries.iter().map(|s| s.assessment.clone()).collect(),
            values: summaries.iter().map(|s| s.pct_at_or_above).collect(),
            target_pct: criteria.target_pct,
        },
        ChartKind::BoxPlot => ChartData::BoxPlot {
            series: columns
                .iter()
                .map(|c| BoxSeries {
                    assessment: c.name.clone(),
                    values: c.valid_scores(),
                })
                .filter(|series| !series.values.is_empty())
                .collect(),
            threshold: criteria.threshold,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/chart.rs"]
mod tests;
