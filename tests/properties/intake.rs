//! Property tests for the boundary validation policy.

use proptest::prelude::*;

use manifold::domain::policies::{validate_brief, validate_equipment};
use manifold::{Equipment, ManifoldError, ProjectBrief};

fn valid_brief() -> ProjectBrief {
    ProjectBrief {
        site_address: "Plot 12".to_string(),
        city: "Pune".to_string(),
        client_name: "Acme".to_string(),
        built_up_area: 1000.0,
        floors: 1,
        ..ProjectBrief::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a brief with a non-finite or non-positive area never
    /// passes the boundary.
    #[test]
    fn property_bad_area_never_passes(area in prop_oneof![
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -1e12f64..=0.0,
    ]) {
        let brief = ProjectBrief { built_up_area: area, ..valid_brief() };
        prop_assert!(validate_brief(&brief).is_err());
    }

    /// PROPERTY: adding an id already present is always rejected as a
    /// duplicate, regardless of the rest of the line.
    #[test]
    fn property_duplicate_ids_always_rejected(
        id in "[a-z0-9-]{1,8}",
        quantity in 1u32..100,
    ) {
        let existing = Equipment { id: id.clone(), quantity: 1, category: "AHU".into(), ..Equipment::default() };
        let incoming = Equipment { id, quantity, category: "Chiller".into(), ..Equipment::default() };

        let err = validate_equipment(&[existing], &incoming).unwrap_err();
        let is_duplicate = matches!(err, ManifoldError::DuplicateEquipmentId { .. });
        prop_assert!(is_duplicate);
    }

    /// PROPERTY: validation never panics on arbitrary strings and numerics.
    #[test]
    fn property_validation_is_total(
        city in "(?s).{0,32}",
        area in any::<f64>(),
        qty in any::<u32>(),
    ) {
        let brief = ProjectBrief { city, built_up_area: area, ..valid_brief() };
        let _ = validate_brief(&brief);

        let item = Equipment { id: "x".into(), category: "y".into(), quantity: qty, ..Equipment::default() };
        let _ = validate_equipment(&[], &item);
    }
}
