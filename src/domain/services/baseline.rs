//! Baseline Derivation Service
//!
//! Maps a project brief to its design baseline. The two load formulas are a
//! market-standard first-cut envelope, not an engineering calculation; they
//! are isolated here so a real load model can replace them without touching
//! the store or the views.

use crate::domain::entities::{DesignInputs, ProjectBrief};
use crate::domain::ports::ReferenceTokenSource;
use crate::domain::value_objects::LayoutStatus;

/// Rule-of-thumb floor area served by one TR of cooling
const SQFT_PER_TR: f64 = 325.0;

/// Rule-of-thumb connected electrical load per sq ft, in kW
const KW_PER_SQFT: f64 = 0.085;

/// Derive the design baseline for a brief
///
/// Pure given the token source: the same brief and token always produce the
/// same baseline. Recomputed wholesale on every brief save.
pub fn derive_baseline(brief: &ProjectBrief, tokens: &mut dyn ReferenceTokenSource) -> DesignInputs {
    let total_cooling_load_tr = (brief.built_up_area / SQFT_PER_TR).round() as i64;
    let electrical_load_kw = (brief.built_up_area * KW_PER_SQFT).round() as i64;

    DesignInputs {
        cad_reference: format!("ID-{}-{}", city_prefix(&brief.city), tokens.next_token()),
        mechanical_layout_status: LayoutStatus::Completed,
        electrical_load_kw,
        total_cooling_load_tr,
        design_assumptions: format!("Market Standard Baseline. Site: {}.", brief.city),
    }
}

/// First three letters of the city, upper-cased
fn city_prefix(city: &str) -> String {
    city.to_uppercase().chars().take(3).collect()
}
