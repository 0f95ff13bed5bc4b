//! Compliance status entity
//!
//! Statutory checkboxes for the project. Singleton with wholesale-replace
//! semantics, like the brief.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FireNocStatus;

/// Regulatory compliance snapshot for the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceStatus {
    pub nbc_compliant: bool,
    pub ecbc_compliant: bool,
    pub fire_noc_status: FireNocStatus,
    pub moef_clearance: bool,
    pub refrigerant_type: String,
    pub municipal_approval: String,
}

impl ComplianceStatus {
    /// True when every tracked item is in its settled/affirmative state
    pub fn is_clear(&self) -> bool {
        self.nbc_compliant
            && self.ecbc_compliant
            && self.fire_noc_status.is_resolved()
            && self.moef_clearance
    }
}
