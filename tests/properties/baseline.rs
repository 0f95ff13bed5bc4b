//! Property tests for the baseline derivation formulas.

use proptest::prelude::*;

use manifold::derive_baseline;
use manifold::domain::ports::FixedTokens;
use manifold::ProjectBrief;

fn brief(city: String, area: f64) -> ProjectBrief {
    ProjectBrief {
        city,
        built_up_area: area,
        ..ProjectBrief::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the load formulas are exactly round(area/325) and
    /// round(area*0.085) for any realistic area.
    #[test]
    fn property_load_formulas_hold(area in 0.0f64..10_000_000.0) {
        let mut tokens = FixedTokens::single(1000);
        let design = derive_baseline(&brief("Pune".to_string(), area), &mut tokens);

        prop_assert_eq!(design.total_cooling_load_tr, (area / 325.0).round() as i64);
        prop_assert_eq!(design.electrical_load_kw, (area * 0.085).round() as i64);
    }

    /// PROPERTY: the CAD reference always reads ID-<prefix>-<4 digits> with
    /// the token in range, for any city including empty and non-ASCII.
    #[test]
    fn property_cad_reference_shape(
        city in "(?s).{0,12}",
        token in 1000u16..=9999,
    ) {
        let mut tokens = FixedTokens::single(token);
        let design = derive_baseline(&brief(city.clone(), 1000.0), &mut tokens);

        let suffix = format!("-{}", token);
        prop_assert!(design.cad_reference.starts_with("ID-"));
        prop_assert!(design.cad_reference.ends_with(&suffix));

        let prefix = &design.cad_reference[3..design.cad_reference.len() - suffix.len()];
        prop_assert!(prefix.chars().count() <= 3);
    }

    /// PROPERTY: derivation never panics on arbitrary numeric input,
    /// including NaN and infinities.
    #[test]
    fn property_derivation_is_total(bits in any::<u64>()) {
        let area = f64::from_bits(bits);
        let mut tokens = FixedTokens::single(1000);
        let _ = derive_baseline(&brief("Pune".to_string(), area), &mut tokens);
    }
}
