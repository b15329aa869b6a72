use super::*;

fn criteria() -> PerformanceCriteria {
    PerformanceCriteria::new(70.0, 70).unwrap()
}

fn summary(name: &str, pct: f64, status: AttainmentStatus) -> AssessmentSummary {
    AssessmentSummary {
        assessment: name.to_string(),
        n: 10,
        mean: 72.0,
        median: 71.0,
        pct_at_or_above: pct,
        status,
    }
}

#[test]
fn test_bar_caption_wording() {
    let caption = figure_caption(ChartKind::Bar, &criteria());
    assert_eq!(
        caption,
        "Figure 1. Bar chart showing the percentage of students meeting the performance \
         threshold of 70 points on each selected assessment. The dashed horizontal line \
         indicates the target of 70% of students at or above the threshold. This \
         visualization provides a direct view of attainment levels used to evaluate ABET \
         learning objective(s) associated with the course."
    );
}

#[test]
fn test_box_caption_wording() {
    let caption = figure_caption(ChartKind::BoxPlot, &criteria());
    assert!(caption.starts_with("Figure 1. Box-and-whisker plot showing the distribution"));
    assert!(caption.contains("performance threshold of 70 points"));
    assert!(caption.contains("requires 70% of students to score at or above this threshold"));
}

#[test]
fn test_caption_formats_threshold_without_decimals() {
    let criteria = PerformanceCriteria::new(82.4, 65).unwrap();
    let caption = figure_caption(ChartKind::Bar, &criteria);
    assert!(caption.contains("threshold of 82 points"));
    assert!(caption.contains("target of 65%"));
}

#[test]
fn test_lead_sentence_alone_when_no_summaries() {
    let narrative = compose_narrative(&[], &criteria(), ChartKind::Bar);
    assert_eq!(
        narrative.body,
        "Using a performance threshold of 70 points and a target of 70% of students at or \
         above this threshold, assessment-level attainment of the ABET objective was evaluated \
         as follows:"
    );
}

#[test]
fn test_bullets_follow_input_order_with_verb_clauses() {
    let summaries = vec![
        summary("Exam1", 75.0, AttainmentStatus::Met),
        summary("HW1", 62.5, AttainmentStatus::PartiallyMet),
        summary("Quiz1", 10.0, AttainmentStatus::NotMet),
    ];
    let narrative = compose_narrative(&summaries, &criteria(), ChartKind::Bar);
    let lines: Vec<&str> = narrative.body.lines().collect();
    assert_eq!(
        lines[1],
        "- **Exam1**: 75.0% of students scored at or above the threshold (met the performance \
         criterion)."
    );
    assert_eq!(
        lines[2],
        "- **HW1**: 62.5% of students scored at or above the threshold (partially met the \
         performance criterion)."
    );
    assert_eq!(
        lines[3],
        "- **Quiz1**: 10.0% of students scored at or above the threshold (did not meet the \
         performance criterion)."
    );
}

#[test]
fn test_roll_up_after_blank_line_in_fixed_order() {
    let summaries = vec![
        summary("Quiz1", 10.0, AttainmentStatus::NotMet),
        summary("Exam1", 75.0, AttainmentStatus::Met),
        summary("Exam2", 80.0, AttainmentStatus::Met),
    ];
    let narrative = compose_narrative(&summaries, &criteria(), ChartKind::Bar);
    let lines: Vec<&str> = narrative.body.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[4], "");
    assert_eq!(
        lines[5],
        "Overall, 2 assessment(s) met the criterion, 1 did not meet the criterion, providing \
         a basis for documenting ABET outcome attainment and identifying areas for improvement."
    );
}

#[test]
fn test_roll_up_skips_zero_statuses() {
    let summaries = vec![summary("Exam1", 75.0, AttainmentStatus::Met)];
    let narrative = compose_narrative(&summaries, &criteria(), ChartKind::Bar);
    assert!(narrative
        .body
        .contains("Overall, 1 assessment(s) met the criterion, providing"));
    assert!(!narrative.body.contains("were partially met"));
    assert!(!narrative.body.contains("did not meet the criterion"));
}

#[test]
fn test_all_three_statuses_in_roll_up() {
    let summaries = vec![
        summary("Exam1", 75.0, AttainmentStatus::Met),
        summary("HW1", 62.5, AttainmentStatus::PartiallyMet),
        summary("Quiz1", 10.0, AttainmentStatus::NotMet),
    ];
    let narrative = compose_narrative(&summaries, &criteria(), ChartKind::Bar);
    assert!(narrative.body.contains(
        "Overall, 1 assessment(s) met the criterion, 1 were partially met, 1 did not meet \
         the criterion, providing"
    ));
}

#[test]
fn test_markdown_document_layout() {
    let summaries = vec![summary("Exam1", 75.0, AttainmentStatus::Met)];
    let narrative = compose_narrative(&summaries, &criteria(), ChartKind::Bar);
    let doc = narrative.to_markdown();
    assert!(doc.starts_with("**Figure Caption**\n\nFigure 1."));
    assert!(doc.contains("\n\n**ABET Outcome Interpretation**\n\nUsing a performance threshold"));
}

#[test]
fn test_composition_is_deterministic() {
    let summaries = vec![
        summary("Exam1", 75.0, AttainmentStatus::Met),
        summary("HW1", 62.5, AttainmentStatus::PartiallyMet),
    ];
    let a = compose_narrative(&summaries, &criteria(), ChartKind::Bar);
    let b = compose_narrative(&summaries, &criteria(), ChartKind::Bar);
    assert_eq!(a, b);
}
