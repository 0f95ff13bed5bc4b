//! Project state aggregate
//!
//! The single aggregate for an intake session. Four independently settable
//! slots; the only cross-field invariant is that a design baseline exists
//! exactly when a brief does.
//!
//! Transformations are pure: every `with_*` method returns a fresh value and
//! leaves `self` untouched, so callers can detect change by comparing
//! aggregates (or by the store's revision counter).

use serde::{Deserialize, Serialize};

use super::{ComplianceStatus, DesignInputs, Equipment, ProjectBrief};

/// Aggregate root for one intake session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectState {
    pub brief: Option<ProjectBrief>,
    pub design: Option<DesignInputs>,
    pub inventory: Vec<Equipment>,
    pub compliance: Option<ComplianceStatus>,
}

impl ProjectState {
    /// Empty session state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the brief and its recomputed design baseline wholesale
    pub fn with_brief(&self, brief: ProjectBrief, design: DesignInputs) -> Self {
        Self {
            brief: Some(brief),
            design: Some(design),
            inventory: self.inventory.clone(),
            compliance: self.compliance.clone(),
        }
    }

    /// Append an equipment line, preserving insertion order
    pub fn with_equipment_added(&self, item: Equipment) -> Self {
        let mut inventory = self.inventory.clone();
        inventory.push(item);
        Self {
            inventory,
            ..self.clone()
        }
    }

    /// Retain only lines whose id differs from `id`
    ///
    /// If the caller violated id uniqueness, every matching line goes. A
    /// missing id is a no-op, not an error.
    pub fn with_equipment_removed(&self, id: &str) -> Self {
        let inventory = self
            .inventory
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        Self {
            inventory,
            ..self.clone()
        }
    }

    /// Replace the compliance snapshot wholesale
    pub fn with_compliance(&self, compliance: ComplianceStatus) -> Self {
        Self {
            compliance: Some(compliance),
            ..self.clone()
        }
    }

    /// True once a brief has been captured
    pub fn has_brief(&self) -> bool {
        self.brief.is_some()
    }

    /// Total value of the bill of quantities in INR
    pub fn inventory_value(&self) -> f64 {
        self.inventory.iter().map(Equipment::line_value).sum()
    }

    /// Total installed cooling capacity across TR-quoted lines
    pub fn installed_capacity_tr(&self) -> f64 {
        self.inventory
            .iter()
            .filter_map(Equipment::installed_tr)
            .sum()
    }

    /// Check the design/brief coupling invariant
    pub fn is_coherent(&self) -> bool {
        self.brief.is_some() == self.design.is_some()
    }
}
