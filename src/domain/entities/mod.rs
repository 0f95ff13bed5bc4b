//! Domain Entities
//!
//! Data shapes for the intake session: the brief, the derived design
//! baseline, equipment lines, compliance status, report findings, and the
//! `ProjectState` aggregate that holds them.

mod brief;
mod compliance;
mod design;
mod equipment;
mod findings;
mod project;

pub use brief::ProjectBrief;
pub use compliance::ComplianceStatus;
pub use design::DesignInputs;
pub use equipment::Equipment;
pub use findings::{CashLeak, OptimizationSuggestion};
pub use project::ProjectState;
