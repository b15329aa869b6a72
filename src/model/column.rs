// Missing cells stay missing, never coerced to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentColumn {
    pub name: String,
    pub scores: Vec<Option<f64>>,
}

impl AssessmentColumn {
    pub fn new(name: impl Into<String>, scores: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }

    pub fn valid_scores(&self) -> Vec<f64> {
        self.scores.iter().filter_map(|s| *s).collect()
    }
}
