use tracing::warn;

use crate::input::{Gradebook, InputError};
use crate::model::AssessmentColumn;

// Case-insensitive substring match, so "Midterm" matches "id" and needs
// --include or --no-default-excludes to be analyzed.
const DEFAULT_EXCLUDE_KEYS: &[&str] = &["name", "id", "netid", "student"];

// Missing score, not a grade of zero.
const MISSING_TOKENS: &[&str] = &["", "na", "n/a", "nan", "null"];

#[derive(Debug, Clone)]
pub struct SelectionOptions {
    pub exclude: Vec<String>,
    pub include: Vec<String>,
    pub use_default_excludes: bool,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            include: Vec::new(),
            use_default_excludes: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SelectionReport {
    pub analyzed: Vec<String>,
    pub excluded: Vec<String>,
    pub non_numeric: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Score(f64),
    Missing,
    NonNumeric,
}

pub fn default_excluded(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    DEFAULT_EXCLUDE_KEYS.iter().any(|key| lower.contains(key))
}

pub fn parse_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if MISSING_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return Cell::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Cell::Score(value),
        _ => Cell::NonNumeric,
    }
}

// Output follows gradebook column order, never flag order.
pub fn select_assessments(
    gradebook: &Gradebook,
    options: &SelectionOptions,
) -> Result<(Vec<AssessmentColumn>, SelectionReport), InputError> {
    for name in &options.include {
        if options.exclude.contains(name) {
            return Err(InputError::InvalidInput(format!(
                "column {name:?} is both included and excluded"
            )));
        }
        if !gradebook.columns.contains(name) {
            return Err(InputError::InvalidInput(format!(
                "unknown assessment column {name:?}"
            )));
        }
    }
    for name in &options.exclude {
        if !gradebook.columns.contains(name) {
            warn!("excluded column {name:?} does not exist in the gradebook");
        }
    }

    let mut columns = Vec::new();
    let mut report = SelectionReport::default();

    for (idx, name) in gradebook.columns.iter().enumerate() {
        let explicitly_included = options.include.contains(name);
        if options.exclude.contains(name) {
            report.excluded.push(name.clone());
            continue;
        }
        if !explicitly_included && options.use_default_excludes && default_excluded(name) {
            report.excluded.push(name.clone());
            continue;
        }
        if !options.include.is_empty() && !explicitly_included {
            report.excluded.push(name.clone());
            continue;
        }

        let mut scores = Vec::with_capacity(gradebook.cells[idx].len());
        let mut numeric = true;
        for raw in &gradebook.cells[idx] {
            match parse_cell(raw) {
                Cell::Score(value) => scores.push(Some(value)),
                Cell::Missing => scores.push(None),
                Cell::NonNumeric => {
                    numeric = false;
                    break;
                }
            }
        }
        if !numeric {
            if explicitly_included {
                return Err(InputError::InvalidInput(format!(
                    "assessment column {name:?} contains non-numeric values"
                )));
            }
            warn!("dropping non-numeric column {name:?}");
            report.non_numeric.push(name.clone());
            continue;
        }

        report.analyzed.push(name.clone());
        columns.push(AssessmentColumn::new(name.clone(), scores));
    }

    Ok((columns, report))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/columns.rs"]
mod tests;
