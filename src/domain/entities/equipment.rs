//! Equipment line entity
//!
//! One manually entered bill-of-quantities line. Identity is the
//! caller-supplied `id`; the aggregate keeps lines in insertion order.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{EfficiencyType, Origin};

/// A single BOQ equipment line with OEM specifics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Unique line id, supplied by the caller
    pub id: String,
    pub category: String,
    pub specification: String,

    /// Capacity in the tagged unit (TR for chillers, CFM for AHUs, ...)
    pub capacity: f64,
    pub capacity_unit: String,
    pub quantity: u32,

    pub supplier: String,
    /// Unit price in INR
    pub unit_price: f64,
    pub warranty_years: u32,

    pub efficiency_value: f64,
    pub efficiency_type: EfficiencyType,

    pub lead_time_weeks: u32,
    pub maintenance_notes: String,
    pub origin: Origin,
}

impl Equipment {
    /// Total value of this line (unit price x quantity)
    pub fn line_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Quoted efficiency normalized to a COP equivalent
    pub fn cop_equivalent(&self) -> f64 {
        self.efficiency_type.cop_equivalent(self.efficiency_value)
    }

    /// Installed capacity contributed by this line, if quoted in TR
    pub fn installed_tr(&self) -> Option<f64> {
        if self.capacity_unit.eq_ignore_ascii_case("tr") {
            Some(self.capacity * f64::from(self.quantity))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chiller() -> Equipment {
        Equipment {
            id: "eq1".to_string(),
            category: "Chiller".to_string(),
            capacity: 10.0,
            capacity_unit: "TR".to_string(),
            quantity: 2,
            unit_price: 450_000.0,
            efficiency_value: 3.4,
            efficiency_type: EfficiencyType::Cop,
            ..Equipment::default()
        }
    }

    #[test]
    fn line_value_multiplies_quantity() {
        assert_eq!(chiller().line_value(), 900_000.0);
    }

    #[test]
    fn installed_tr_matches_unit_case_insensitively() {
        let mut item = chiller();
        assert_eq!(item.installed_tr(), Some(20.0));

        item.capacity_unit = "tr".to_string();
        assert_eq!(item.installed_tr(), Some(20.0));

        item.capacity_unit = "CFM".to_string();
        assert_eq!(item.installed_tr(), None);
    }

    #[test]
    fn equipment_serde_camel_case() {
        let json = serde_json::to_value(chiller()).unwrap();
        assert_eq!(json["capacityUnit"], "TR");
        assert_eq!(json["efficiencyType"], "COP");
        assert_eq!(json["origin"], "Local");
    }
}
