use crate::model::{
    status_order, AssessmentSummary, AttainmentStatus, PerformanceCriteria, StatusCounts,
};
use crate::pipeline::chart::ChartKind;
use crate::report::{format_1dp, format_threshold};

#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeReport {
    pub caption: String,
    pub body: String,
}

impl NarrativeReport {
    pub fn to_markdown(&self) -> String {
        format!(
            "**Figure Caption**\n\n{}\n\n**ABET Outcome Interpretation**\n\n{}",
            self.caption, self.body
        )
    }
}

pub fn compose_narrative(
    summaries: &[AssessmentSummary],
    criteria: &PerformanceCriteria,
    chart: ChartKind,
) -> NarrativeReport {
    let mut lines = Vec::with_capacity(summaries.len() + 3);
    lines.push(lead_line(criteria));
    for summary in summaries {
        lines.push(bullet_line(summary));
    }
    if let Some(roll_up) = roll_up_line(&StatusCounts::tally(summaries)) {
        lines.push(String::new());
        lines.push(roll_up);
    }

    NarrativeReport {
        caption: figure_caption(chart, criteria),
        body: lines.join("\n"),
    }
}

pub fn figure_caption(chart: ChartKind, criteria: &PerformanceCriteria) -> String {
    let threshold = format_threshold(criteria.threshold);
    let target_pct = criteria.target_pct;
    match chart {
        ChartKind::Bar => format!(
            "Figure 1. Bar chart showing the percentage of students meeting the performance \
             threshold of {threshold} points on each selected assessment. The dashed horizontal \
             line indicates the target of {target_pct}% of students at or above the threshold. \
             This visualization provides a direct view of attainment levels used to evaluate \
             ABET learning objective(s) associated with the course."
        ),
        ChartKind::BoxPlot => format!(
            "Figure 1. Box-and-whisker plot showing the distribution of student scores on each \
             selected assessment. The dashed horizontal line marks the performance threshold of \
             {threshold} points; the criterion requires {target_pct}% of students to score at \
             or above this threshold. This visualization provides a direct view of attainment \
             levels used to evaluate ABET learning objective(s) associated with the course."
        ),
    }
}

fn lead_line(criteria: &PerformanceCriteria) -> String {
    format!(
        "Using a performance threshold of {} points and a target of {}% of students at or \
         above this threshold, assessment-level attainment of the ABET objective was evaluated \
         as follows:",
        format_threshold(criteria.threshold),
        criteria.target_pct
    )
}

fn bullet_line(summary: &AssessmentSummary) -> String {
    format!(
        "- **{}**: {}% of students scored at or above the threshold ({}).",
        summary.assessment,
        format_1dp(summary.pct_at_or_above),
        summary.status.verb_clause()
    )
}

fn roll_up_line(counts: &StatusCounts) -> Option<String> {
    if counts.total() == 0 {
        return None;
    }
    let mut parts = Vec::new();
    for &status in status_order() {
        let n = counts.get(status);
        if n == 0 {
            continue;
        }
        parts.push(match status {
            AttainmentStatus::Met => format!("{n} assessment(s) met the criterion"),
            AttainmentStatus::PartiallyMet => format!("{n} were partially met"),
            AttainmentStatus::NotMet => format!("{n} did not meet the criterion"),
        });
    }
    Some(format!(
        "Overall, {}, providing a basis for documenting ABET outcome attainment and \
         identifying areas for improvement.",
        parts.join(", ")
    ))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/narrative.rs"]
mod tests;
