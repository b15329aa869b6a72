mod input;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::input::{load_gradebook, select_assessments, SelectionOptions};
use crate::model::PerformanceCriteria;
use crate::pipeline::analyze::compute_summaries;
use crate::pipeline::chart::{build_chart_data, ChartKind};
use crate::pipeline::render::{write_artifacts, RenderInput};
use crate::report::narrative::compose_narrative;

#[derive(Debug, Parser)]
#[command(name = "abet-attain", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a gradebook export and write attainment artifacts
    Run {
        /// Gradebook CSV (or .csv.gz): one column per assessment, one row
        /// per student
        #[arg(long)]
        input: PathBuf,
        /// Output directory for the generated artifacts
        #[arg(long, default_value = "out")]
        out: PathBuf,
        /// Score threshold for meeting the objective on an assessment
        #[arg(long, default_value_t = 70.0)]
        threshold: f64,
        /// Target percentage of students at or above the threshold
        #[arg(long, default_value_t = 70)]
        target_pct: u8,
        /// Chart variant to prepare data for
        #[arg(long, value_enum, default_value = "bar")]
        chart: ChartArg,
        /// Skip the narrative document
        #[arg(long)]
        no_narrative: bool,
        /// Column to exclude from analysis (repeatable)
        #[arg(long, value_name = "COLUMN")]
        exclude: Vec<String>,
        /// Analyze only these columns, overriding the default roster
        /// exclusions (repeatable)
        #[arg(long, value_name = "COLUMN")]
        include: Vec<String>,
        /// Keep columns whose names match the roster heuristic (name, id,
        /// netid, student)
        #[arg(long)]
        no_default_excludes: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ChartArg {
    Bar,
    Box,
}

impl From<ChartArg> for ChartKind {
    fn from(arg: ChartArg) -> Self {
        match arg {
            ChartArg::Bar => ChartKind::Bar,
            ChartArg::Box => ChartKind::BoxPlot,
        }
    }
}

#[derive(Debug, Clone)]
struct RunConfig {
    input: PathBuf,
    out: PathBuf,
    criteria: PerformanceCriteria,
    chart_kind: ChartKind,
    include_narrative: bool,
    selection: SelectionOptions,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let config = build_config(cli.command)?;

    let gradebook = load_gradebook(&config.input).map_err(|e| e.to_string())?;
    info!(
        "loaded gradebook {} with {} columns and {} rows",
        config.input.display(),
        gradebook.column_count(),
        gradebook.row_count()
    );

    let (columns, selection) =
        select_assessments(&gradebook, &config.selection).map_err(|e| e.to_string())?;
    if columns.is_empty() {
        return Err(
            "no numeric assessment columns found after exclusions; adjust your selection or \
             check the file format"
                .to_string(),
        );
    }
    info!(
        "numeric assessment columns detected: {}",
        selection.analyzed.join(", ")
    );

    let summaries =
        compute_summaries(&columns, &config.criteria).map_err(|e| e.to_string())?;
    if summaries.is_empty() {
        return Err("no valid numeric data found for the selected assessments".to_string());
    }

    let chart = build_chart_data(config.chart_kind, &columns, &summaries, &config.criteria);
    let narrative = config
        .include_narrative
        .then(|| compose_narrative(&summaries, &config.criteria, config.chart_kind));

    let render = RenderInput {
        input_path: &config.input,
        rows: gradebook.row_count(),
        columns_total: gradebook.column_count(),
        criteria: &config.criteria,
        chart_kind: config.chart_kind,
        chart: &chart,
        summaries: &summaries,
        selection: &selection,
        narrative: narrative.as_ref(),
    };
    write_artifacts(&render, &config.out).map_err(|e| e.to_string())?;
    info!("artifacts written to {}", config.out.display());

    Ok(())
}

fn build_config(command: Commands) -> Result<RunConfig, String> {
    let Commands::Run {
        input,
        out,
        threshold,
        target_pct,
        chart,
        no_narrative,
        exclude,
        include,
        no_default_excludes,
    } = command;

    Ok(RunConfig {
        input,
        out,
        criteria: PerformanceCriteria::new(threshold, target_pct).map_err(|e| e.to_string())?,
        chart_kind: chart.into(),
        include_narrative: !no_narrative,
        selection: SelectionOptions {
            exclude,
            include,
            use_default_excludes: !no_default_excludes,
        },
    })
}
