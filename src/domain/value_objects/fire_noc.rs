use serde::{Deserialize, Serialize};

/// Fire-department No Objection Certificate status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FireNocStatus {
    Applied,
    Received,
    #[serde(rename = "Not Required")]
    NotRequired,
    #[default]
    Pending,
}

impl FireNocStatus {
    /// All statuses, in menu order
    pub const ALL: [FireNocStatus; 4] = [
        FireNocStatus::Applied,
        FireNocStatus::Received,
        FireNocStatus::NotRequired,
        FireNocStatus::Pending,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FireNocStatus::Applied => "Applied",
            FireNocStatus::Received => "Received",
            FireNocStatus::NotRequired => "Not Required",
            FireNocStatus::Pending => "Pending",
        }
    }

    /// True when the certificate question is settled
    pub fn is_resolved(&self) -> bool {
        matches!(self, FireNocStatus::Received | FireNocStatus::NotRequired)
    }
}

impl std::fmt::Display for FireNocStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
