use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::input::SelectionReport;
use crate::model::{AssessmentSummary, PerformanceCriteria, StatusCounts, PARTIAL_BAND};
use crate::pipeline::chart::{ChartData, ChartKind};
use crate::report::format_1dp;
use crate::report::json::{render_run_summary, InputAccounting, Parameters, RunSummary, ToolMeta};
use crate::report::narrative::NarrativeReport;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct RenderInput<'a> {
    pub input_path: &'a Path,
    pub rows: usize,
    pub columns_total: usize,
    pub criteria: &'a PerformanceCriteria,
    pub chart_kind: ChartKind,
    pub chart: &'a ChartData,
    pub summaries: &'a [AssessmentSummary],
    pub selection: &'a SelectionReport,
    pub narrative: Option<&'a NarrativeReport>,
}

pub fn write_artifacts(input: &RenderInput<'_>, out_dir: &Path) -> Result<(), RenderError> {
    fs::create_dir_all(out_dir)?;

    write_attainment_table(input.summaries, &out_dir.join("attainment.csv"))?;

    let summary = RunSummary {
        tool: ToolMeta::current(),
        parameters: Parameters {
            threshold: input.criteria.threshold,
            target_pct: input.criteria.target_pct,
            partial_band: PARTIAL_BAND,
            chart: input.chart_kind,
            narrative: input.narrative.is_some(),
        },
        input: InputAccounting {
            path: input.input_path.display().to_string(),
            rows: input.rows,
            columns_total: input.columns_total,
            columns_analyzed: &input.selection.analyzed,
            columns_excluded: &input.selection.excluded,
            columns_non_numeric: &input.selection.non_numeric,
        },
        assessments: input.summaries,
        status_counts: StatusCounts::tally(input.summaries),
    };
    write_text(&out_dir.join("summary.json"), &render_run_summary(&summary)?)?;

    let mut chart_json = serde_json::to_string_pretty(input.chart)?;
    chart_json.push('\n');
    write_text(&out_dir.join("chart.json"), &chart_json)?;

    if let Some(narrative) = input.narrative {
        let mut doc = narrative.to_markdown();
        doc.push('\n');
        write_text(&out_dir.join("narrative.md"), &doc)?;
    }

    Ok(())
}

fn write_attainment_table(
    summaries: &[AssessmentSummary],
    path: &Path,
) -> Result<(), RenderError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["assessment", "n", "mean", "median", "pct_at_or_above", "status"])?;
    for summary in summaries {
        writer.write_record(&[
            summary.assessment.clone(),
            summary.n.to_string(),
            format_1dp(summary.mean),
            format_1dp(summary.median),
            format_1dp(summary.pct_at_or_above),
            summary.status.label().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(contents.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/render.rs"]
mod tests;
