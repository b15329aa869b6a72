pub mod analyze;
pub mod chart;
pub mod render;
