use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttainmentStatus {
    Met,
    PartiallyMet,
    NotMet,
}

// Roll-up order.
pub fn status_order() -> &'static [AttainmentStatus] {
    &[
        AttainmentStatus::Met,
        AttainmentStatus::PartiallyMet,
        AttainmentStatus::NotMet,
    ]
}

impl AttainmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AttainmentStatus::Met => "met",
            AttainmentStatus::PartiallyMet => "partially met",
            AttainmentStatus::NotMet => "not met",
        }
    }

    pub fn verb_clause(&self) -> &'static str {
        match self {
            AttainmentStatus::Met => "met the performance criterion",
            AttainmentStatus::PartiallyMet => "partially met the performance criterion",
            AttainmentStatus::NotMet => "did not meet the performance criterion",
        }
    }
}
