use serde::{Deserialize, Serialize};

/// Category of a cash-leak finding, by the phase that causes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeakCategory {
    #[serde(rename = "Design-driven")]
    Design,
    #[serde(rename = "Specification-driven")]
    Specification,
    #[serde(rename = "Procurement-driven")]
    Procurement,
    #[serde(rename = "Execution-driven")]
    Execution,
}

impl LeakCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            LeakCategory::Design => "Design-driven",
            LeakCategory::Specification => "Specification-driven",
            LeakCategory::Procurement => "Procurement-driven",
            LeakCategory::Execution => "Execution-driven",
        }
    }
}

impl std::fmt::Display for LeakCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
