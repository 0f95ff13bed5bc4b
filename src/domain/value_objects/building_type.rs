//! Building type value object - drives which code baselines apply

use serde::{Deserialize, Serialize};

/// Building classification for the project site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BuildingType {
    Residential,
    #[default]
    Commercial,
    Industrial,
}

impl BuildingType {
    /// All building types, in menu order
    pub const ALL: [BuildingType; 3] = [
        BuildingType::Residential,
        BuildingType::Commercial,
        BuildingType::Industrial,
    ];

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingType::Residential => "Residential",
            BuildingType::Commercial => "Commercial",
            BuildingType::Industrial => "Industrial",
        }
    }
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
