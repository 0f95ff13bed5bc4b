use serde::{Deserialize, Serialize};

/// Sourcing origin of an equipment line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Origin {
    #[default]
    Local,
    Imported,
}

impl Origin {
    pub fn display_name(&self) -> &'static str {
        match self {
            Origin::Local => "Local",
            Origin::Imported => "Imported",
        }
    }
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
