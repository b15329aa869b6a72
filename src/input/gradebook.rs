use std::path::Path;

use crate::input::{open_maybe_gz, InputError};

// Cells stay raw here; numeric coercion happens at column selection.
#[derive(Debug, Clone)]
pub struct Gradebook {
    pub columns: Vec<String>,
    pub cells: Vec<Vec<String>>,
}

impl Gradebook {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }
}

pub fn load_gradebook(path: &Path) -> Result<Gradebook, InputError> {
    let reader = open_maybe_gz(path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if columns.is_empty() || columns.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse(
            "gradebook has no header row".to_string(),
        ));
    }
    for (idx, name) in columns.iter().enumerate() {
        if name.is_empty() {
            return Err(InputError::InvalidInput(format!(
                "column {} has an empty header",
                idx + 1
            )));
        }
        if columns[..idx].contains(name) {
            return Err(InputError::InvalidInput(format!(
                "duplicate column name: {name}"
            )));
        }
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); columns.len()];
    for record in csv_reader.records() {
        let record = record?;
        for (idx, cell) in record.iter().enumerate() {
            cells[idx].push(cell.to_string());
        }
    }

    Ok(Gradebook { columns, cells })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/gradebook.rs"]
mod tests;
