//! Intake Validation Policy
//!
//! Shape-level validation for values arriving from the input surfaces.
//! The store's operations stay total; anything that should be refused is
//! refused here, before an event reaches the store.

use crate::domain::entities::{Equipment, ProjectBrief};
use crate::error::{ManifoldError, ManifoldResult};

/// Validate a brief before it is saved
pub fn validate_brief(brief: &ProjectBrief) -> ManifoldResult<()> {
    require_text("site_address", &brief.site_address)?;
    require_text("city", &brief.city)?;
    require_text("client_name", &brief.client_name)?;

    require_positive("built_up_area", brief.built_up_area)?;
    require_non_negative("occupancy_density", brief.occupancy_density)?;
    require_non_negative("target_budget", brief.target_budget)?;

    if brief.floors == 0 {
        return Err(ManifoldError::validation("floors", "must be at least 1"));
    }

    Ok(())
}

/// Validate an equipment line against the current inventory before it is added
///
/// Rejects duplicate ids here so that inside the store every id-based
/// operation can stay a plain filter.
pub fn validate_equipment(inventory: &[Equipment], item: &Equipment) -> ManifoldResult<()> {
    require_text("id", &item.id)?;
    require_text("category", &item.category)?;

    if inventory.iter().any(|existing| existing.id == item.id) {
        return Err(ManifoldError::DuplicateEquipmentId {
            id: item.id.clone(),
        });
    }

    if item.quantity == 0 {
        return Err(ManifoldError::validation("quantity", "must be at least 1"));
    }

    require_non_negative("capacity", item.capacity)?;
    require_non_negative("unit_price", item.unit_price)?;
    require_non_negative("efficiency_value", item.efficiency_value)?;

    Ok(())
}

fn require_text(field: &str, value: &str) -> ManifoldResult<()> {
    if value.trim().is_empty() {
        return Err(ManifoldError::validation(field, "must not be empty"));
    }
    Ok(())
}

fn require_positive(field: &str, value: f64) -> ManifoldResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ManifoldError::validation(
            field,
            "must be a positive number",
        ));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: f64) -> ManifoldResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ManifoldError::validation(
            field,
            "must be a non-negative number",
        ));
    }
    Ok(())
}
