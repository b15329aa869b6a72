pub mod column;
pub mod criteria;
pub mod status;
pub mod summary;

pub use column::AssessmentColumn;
pub use criteria::{InvalidInput, PerformanceCriteria, PARTIAL_BAND};
pub use status::{status_order, AttainmentStatus};
pub use summary::{AssessmentSummary, StatusCounts};
