//! Design baseline entity
//!
//! The derived engineering envelope. Exists if and only if a brief has been
//! saved, and is fully recomputed - never merged - whenever the brief
//! changes. See `domain::services::baseline` for the derivation itself.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::LayoutStatus;

/// Derived design inputs for the current brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignInputs {
    /// CAD drawing reference, e.g. `ID-PUN-4821`
    pub cad_reference: String,
    pub mechanical_layout_status: LayoutStatus,
    /// Projected peak electrical load in kW
    #[serde(rename = "electricalLoadKW")]
    pub electrical_load_kw: i64,
    /// Projected total cooling load in TR
    #[serde(rename = "totalCoolingLoadTR")]
    pub total_cooling_load_tr: i64,
    pub design_assumptions: String,
}
