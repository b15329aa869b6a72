use serde::Serialize;

use crate::model::{AssessmentSummary, StatusCounts};
use crate::pipeline::chart::ChartKind;

#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    pub tool: ToolMeta,
    pub parameters: Parameters,
    pub input: InputAccounting<'a>,
    pub assessments: &'a [AssessmentSummary],
    pub status_counts: StatusCounts,
}

#[derive(Debug, Serialize)]
pub struct ToolMeta {
    pub name: &'static str,
    pub version: &'static str,
}

impl ToolMeta {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Parameters {
    pub threshold: f64,
    pub target_pct: u8,
    pub partial_band: f64,
    pub chart: ChartKind,
    pub narrative: bool,
}

#[derive(Debug, Serialize)]
pub struct InputAccounting<'a> {
    pub path: String,
    pub rows: usize,
    pub columns_total: usize,
    pub columns_analyzed: &'a [String],
    pub columns_excluded: &'a [String],
    pub columns_non_numeric: &'a [String],
}

pub fn render_run_summary(summary: &RunSummary<'_>) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(summary)?;
    out.push('\n');
    Ok(out)
}
