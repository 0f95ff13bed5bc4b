//! Report findings entities
//!
//! Read-model shapes consumed by the analysis view. Derived from a state
//! snapshot by `domain::services::analysis`; never mutated by the store.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{LeakCategory, RiskLevel};

/// An identified avoidable cost in the current plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashLeak {
    pub category: LeakCategory,
    pub description: String,
    /// Estimated avoidable spend in INR
    pub impact_amount: f64,
    pub justification: String,
}

/// A recommended change with quantified impact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationSuggestion {
    pub title: String,
    /// What the recommendation is grounded on
    pub basis: String,
    /// Expected saving (positive) in INR
    pub cost_impact: f64,
    pub energy_impact: String,
    pub compliance_impact: String,
    pub risk_level: RiskLevel,
}
