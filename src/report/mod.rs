pub mod json;
pub mod narrative;

pub fn format_1dp(value: f64) -> String {
    format!("{value:.1}")
}

pub fn format_threshold(value: f64) -> String {
    format!("{value:.0}")
}
