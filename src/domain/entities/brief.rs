//! Project brief entity
//!
//! The mandatory consultancy intake record. A brief is captured or replaced
//! wholesale on form save and is never partially patched; saving one always
//! triggers a full recomputation of the design baseline.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AreaUnit, BuildingType};

/// Client project brief - one per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectBrief {
    pub site_address: String,
    pub city: String,
    pub building_type: BuildingType,

    /// Built-up area in the tagged unit
    pub built_up_area: f64,
    #[serde(rename = "unit")]
    pub area_unit: AreaUnit,

    pub floors: u32,
    pub occupancy_type: String,
    /// Persons per 100 sq ft
    pub occupancy_density: f64,
    pub operating_hours: String,

    /// Target budget in INR
    pub target_budget: f64,
    pub target_timeline: String,

    pub client_name: String,
    pub contractor_name: String,
    pub performance_expectations: String,
}
