use serde::{Deserialize, Serialize};

/// Unit tag for the built-up area figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    #[default]
    Sqft,
    Sqm,
}

impl AreaUnit {
    pub fn display_name(&self) -> &'static str {
        match self {
            AreaUnit::Sqft => "sq ft",
            AreaUnit::Sqm => "sq m",
        }
    }
}

impl std::fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
