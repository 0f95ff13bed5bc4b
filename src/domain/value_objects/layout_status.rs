use serde::{Deserialize, Serialize};

/// Mechanical layout progress for the derived design baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LayoutStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl LayoutStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            LayoutStatus::Pending => "Pending",
            LayoutStatus::InProgress => "In Progress",
            LayoutStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for LayoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
