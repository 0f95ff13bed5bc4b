//! Session Controller
//!
//! Tab-scoped orchestration for the studio. The controller owns the store,
//! tracks which tab is active, validates events at the boundary, and exposes
//! the aggregate read-only to the reporting side. It is the only writer.

use crate::domain::entities::{ComplianceStatus, Equipment, ProjectBrief, ProjectState};
use crate::domain::policies::{validate_brief, validate_equipment};
use crate::domain::ports::{Clock, SystemClock};
use crate::domain::value_objects::ProjectCode;
use crate::error::ManifoldResult;
use crate::store::ProjectStore;

/// Input surfaces of the studio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Project brief capture
    #[default]
    Setup,
    /// Bill of quantities and compliance
    Boq,
    /// Findings report
    Analysis,
}

impl Tab {
    /// All tabs, in menu order
    pub const ALL: [Tab; 3] = [Tab::Setup, Tab::Boq, Tab::Analysis];

    pub fn display_name(&self) -> &'static str {
        match self {
            Tab::Setup => "Brief",
            Tab::Boq => "Inventory",
            Tab::Analysis => "Analysis",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// An edit arriving from one of the input surfaces
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeEvent {
    SaveBrief(ProjectBrief),
    AddEquipment(Equipment),
    RemoveEquipment(String),
    SaveCompliance(ComplianceStatus),
}

/// Orchestrates one studio session
pub struct SessionController {
    store: ProjectStore,
    active_tab: Tab,
    clock: Box<dyn Clock>,
}

impl SessionController {
    /// Controller with production store and clock
    pub fn new() -> Self {
        Self::with_parts(ProjectStore::new(), Box::new(SystemClock::new()))
    }

    /// Controller with injected store and clock (deterministic under test)
    pub fn with_parts(store: ProjectStore, clock: Box<dyn Clock>) -> Self {
        Self {
            store,
            active_tab: Tab::default(),
            clock,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switch the active tab; every tab is reachable from every tab
    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Validate an event at the boundary and route it into the store
    ///
    /// On a validation failure the store is left untouched and the error is
    /// returned for the input surface to display.
    pub fn handle(&mut self, event: IntakeEvent) -> ManifoldResult<()> {
        match event {
            IntakeEvent::SaveBrief(brief) => {
                validate_brief(&brief)?;
                self.store.set_brief(brief);
            }
            IntakeEvent::AddEquipment(item) => {
                validate_equipment(&self.store.state().inventory, &item)?;
                self.store.add_equipment(item);
            }
            IntakeEvent::RemoveEquipment(id) => {
                self.store.remove_equipment(&id);
            }
            IntakeEvent::SaveCompliance(compliance) => {
                self.store.set_compliance(compliance);
            }
        }
        Ok(())
    }

    /// Read-only view of the aggregate for the reporting side
    pub fn state(&self) -> &ProjectState {
        self.store.state()
    }

    /// Store revision, for cheap change detection by the host loop
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// Display code for the session, recomputed on every read
    ///
    /// Not a pure function of state: the year comes from the injected clock.
    pub fn project_code(&self) -> ProjectCode {
        match &self.store.state().brief {
            Some(brief) if !brief.client_name.is_empty() => {
                ProjectCode::for_site(&brief.city, self.clock.current_year())
            }
            _ => ProjectCode::placeholder(),
        }
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
