//! Efficiency metric value object
//!
//! Equipment efficiency is quoted against one of three industry metrics.
//! EER figures are converted to a COP equivalent (1 COP = 3.412 EER) so
//! that the analyzer can compare lines against a single floor.

use serde::{Deserialize, Serialize};

/// Metric under which an equipment efficiency value is quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EfficiencyType {
    #[default]
    Cop,
    Eer,
    Iplv,
}

impl EfficiencyType {
    /// All metrics, in menu order
    pub const ALL: [EfficiencyType; 3] = [
        EfficiencyType::Cop,
        EfficiencyType::Eer,
        EfficiencyType::Iplv,
    ];

    /// Convert a quoted value under this metric to a COP equivalent
    pub fn cop_equivalent(&self, value: f64) -> f64 {
        match self {
            EfficiencyType::Cop | EfficiencyType::Iplv => value,
            EfficiencyType::Eer => value / 3.412,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EfficiencyType::Cop => "COP",
            EfficiencyType::Eer => "EER",
            EfficiencyType::Iplv => "IPLV",
        }
    }
}

impl std::fmt::Display for EfficiencyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
