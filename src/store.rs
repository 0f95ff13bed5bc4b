//! Project State Store
//!
//! Owns the single `ProjectState` aggregate for a session. Every operation
//! is total and synchronous: it builds a fresh aggregate from the current
//! one plus the input, swaps it in, and bumps a revision counter. The old
//! value is never mutated in place, so hosts can detect change either by
//! comparing snapshots or by watching the revision.
//!
//! The store does no validation; see `domain::policies::intake` for the
//! boundary checks the controller applies before events land here.

use crate::domain::entities::{ComplianceStatus, Equipment, ProjectBrief, ProjectState};
use crate::domain::ports::{ReferenceTokenSource, ThreadRngTokens};
use crate::domain::services::derive_baseline;

/// Holder of the session aggregate
pub struct ProjectStore {
    state: ProjectState,
    revision: u64,
    tokens: Box<dyn ReferenceTokenSource>,
}

impl ProjectStore {
    /// Store with the production token source
    pub fn new() -> Self {
        Self::with_token_source(Box::new(ThreadRngTokens::new()))
    }

    /// Store with an injected token source (deterministic under test)
    pub fn with_token_source(tokens: Box<dyn ReferenceTokenSource>) -> Self {
        Self {
            state: ProjectState::new(),
            revision: 0,
            tokens,
        }
    }

    /// Current aggregate, by reference
    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    /// Owned snapshot of the current aggregate
    pub fn snapshot(&self) -> ProjectState {
        self.state.clone()
    }

    /// Number of replacements applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the brief wholesale and recompute the design baseline
    pub fn set_brief(&mut self, brief: ProjectBrief) {
        let design = derive_baseline(&brief, self.tokens.as_mut());
        self.replace(self.state.with_brief(brief, design));
    }

    /// Append an equipment line to the inventory
    pub fn add_equipment(&mut self, item: Equipment) {
        self.replace(self.state.with_equipment_added(item));
    }

    /// Drop every inventory line carrying `id`; no-op when none match
    pub fn remove_equipment(&mut self, id: &str) {
        self.replace(self.state.with_equipment_removed(id));
    }

    /// Replace the compliance snapshot wholesale
    pub fn set_compliance(&mut self, compliance: ComplianceStatus) {
        self.replace(self.state.with_compliance(compliance));
    }

    fn replace(&mut self, next: ProjectState) {
        debug_assert!(next.is_coherent());
        self.state = next;
        self.revision += 1;
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixedTokens;
    use crate::domain::value_objects::LayoutStatus;

    fn store() -> ProjectStore {
        ProjectStore::with_token_source(Box::new(FixedTokens::single(4821)))
    }

    fn brief(city: &str, area: f64) -> ProjectBrief {
        ProjectBrief {
            city: city.to_string(),
            client_name: "Acme Realty".to_string(),
            built_up_area: area,
            ..ProjectBrief::default()
        }
    }

    fn item(id: &str) -> Equipment {
        Equipment {
            id: id.to_string(),
            category: "AHU".to_string(),
            quantity: 1,
            ..Equipment::default()
        }
    }

    #[test]
    fn new_store_is_empty_at_revision_zero() {
        let store = store();
        assert_eq!(store.state(), &ProjectState::new());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn set_brief_replaces_wholesale() {
        let mut store = store();
        store.set_brief(brief("Mumbai", 3250.0));
        store.set_brief(brief("Pune", 6500.0));

        let saved = store.state().brief.as_ref().unwrap();
        assert_eq!(saved.city, "Pune");
        // no merging with the Mumbai brief
        assert_eq!(saved.built_up_area, 6500.0);
    }

    #[test]
    fn set_brief_recomputes_design() {
        let mut store = store();
        store.set_brief(brief("Pune", 3250.0));

        let design = store.state().design.as_ref().unwrap();
        assert_eq!(design.total_cooling_load_tr, 10);
        assert_eq!(design.electrical_load_kw, 276);
        assert_eq!(design.cad_reference, "ID-PUN-4821");
        assert_eq!(design.mechanical_layout_status, LayoutStatus::Completed);
    }

    #[test]
    fn design_absent_until_first_brief() {
        let mut store = store();
        assert!(store.state().design.is_none());

        store.set_brief(brief("Pune", 3250.0));
        assert!(store.state().design.is_some());
        assert!(store.state().is_coherent());
    }

    #[test]
    fn add_equipment_appends_in_order() {
        let mut store = store();
        store.add_equipment(item("a"));
        store.add_equipment(item("b"));
        store.add_equipment(item("c"));

        let ids: Vec<&str> = store
            .state()
            .inventory
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn remove_equipment_drops_all_matches() {
        let mut store = store();
        store.add_equipment(item("x"));
        store.add_equipment(item("x"));
        store.remove_equipment("x");

        assert!(store.state().inventory.is_empty());
    }

    #[test]
    fn remove_unknown_id_leaves_inventory_unchanged() {
        let mut store = store();
        store.add_equipment(item("a"));
        let before = store.snapshot();

        store.remove_equipment("nope");
        assert_eq!(store.state().inventory, before.inventory);
    }

    #[test]
    fn set_compliance_twice_with_same_value_is_idempotent() {
        let mut store = store();
        let compliance = ComplianceStatus {
            nbc_compliant: true,
            ..ComplianceStatus::default()
        };

        store.set_compliance(compliance.clone());
        let once = store.snapshot();

        store.set_compliance(compliance);
        assert_eq!(store.snapshot(), once);
    }

    #[test]
    fn every_operation_bumps_the_revision() {
        let mut store = store();
        store.set_brief(brief("Pune", 100.0));
        store.add_equipment(item("a"));
        store.remove_equipment("a");
        store.set_compliance(ComplianceStatus::default());

        assert_eq!(store.revision(), 4);
    }

    #[test]
    fn snapshot_is_detached_from_later_edits() {
        let mut store = store();
        store.add_equipment(item("a"));
        let snapshot = store.snapshot();

        store.add_equipment(item("b"));
        assert_eq!(snapshot.inventory.len(), 1);
        assert_eq!(store.state().inventory.len(), 2);
    }
}
