//! Manifold - HVAC consultancy intake studio
//!
//! Manifold captures a project brief for an HVAC consultancy engagement,
//! derives a baseline engineering envelope from it, manages a manually
//! entered bill of quantities, tracks statutory compliance status, and
//! produces cost-leak and optimization findings for the session.

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod store;

// Re-exports for convenience
pub use config::{AnalysisConfig, Config, OutputConfig};
pub use controller::{IntakeEvent, SessionController, Tab};
pub use domain::entities::{
    CashLeak, ComplianceStatus, DesignInputs, Equipment, OptimizationSuggestion, ProjectBrief,
    ProjectState,
};
pub use domain::services::{analyze, derive_baseline, ReportFindings};
pub use domain::value_objects::ProjectCode;
pub use error::{ManifoldError, ManifoldResult};
pub use store::ProjectStore;
