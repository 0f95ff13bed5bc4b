//! Property tests for the project state store.

use proptest::prelude::*;

use manifold::domain::ports::FixedTokens;
use manifold::{ComplianceStatus, Equipment, ProjectBrief, ProjectStore};

fn ident() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}").unwrap()
}

fn city() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z]{0,12}").unwrap()
}

/// One store operation, generated
#[derive(Debug, Clone)]
enum Op {
    SetBrief(String, f64),
    Add(String),
    Remove(String),
    SetCompliance(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (city(), -1e9f64..1e9).prop_map(|(c, a)| Op::SetBrief(c, a)),
        ident().prop_map(Op::Add),
        ident().prop_map(Op::Remove),
        any::<bool>().prop_map(Op::SetCompliance),
    ]
}

fn apply(store: &mut ProjectStore, op: Op) {
    match op {
        Op::SetBrief(c, a) => store.set_brief(ProjectBrief {
            city: c,
            built_up_area: a,
            ..ProjectBrief::default()
        }),
        Op::Add(id) => store.add_equipment(Equipment {
            id,
            quantity: 1,
            ..Equipment::default()
        }),
        Op::Remove(id) => store.remove_equipment(&id),
        Op::SetCompliance(nbc) => store.set_compliance(ComplianceStatus {
            nbc_compliant: nbc,
            ..ComplianceStatus::default()
        }),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: design exists iff brief exists, across any operation sequence.
    /// Store operations are total and never panic, even for hostile numerics.
    #[test]
    fn property_design_iff_brief_for_all_reachable_states(
        ops in proptest::collection::vec(op(), 0..24),
    ) {
        let mut store = ProjectStore::with_token_source(Box::new(FixedTokens::single(1000)));
        for o in ops {
            apply(&mut store, o);
            prop_assert!(store.state().is_coherent());
        }
    }

    /// PROPERTY: inventory ids after any sequence equal the fold of
    /// push/filter over the same sequence (append order preserved).
    #[test]
    fn property_inventory_matches_a_plain_fold(
        ops in proptest::collection::vec(op(), 0..24),
    ) {
        let mut store = ProjectStore::with_token_source(Box::new(FixedTokens::single(1000)));
        let mut model: Vec<String> = Vec::new();

        for o in ops {
            match &o {
                Op::Add(id) => model.push(id.clone()),
                Op::Remove(id) => model.retain(|m| m != id),
                _ => {}
            }
            apply(&mut store, o);
        }

        let actual: Vec<String> = store
            .state()
            .inventory
            .iter()
            .map(|i| i.id.clone())
            .collect();
        prop_assert_eq!(actual, model);
    }

    /// PROPERTY: every operation bumps the revision by exactly one.
    #[test]
    fn property_revision_counts_operations(
        ops in proptest::collection::vec(op(), 0..24),
    ) {
        let mut store = ProjectStore::with_token_source(Box::new(FixedTokens::single(1000)));
        let n = ops.len() as u64;
        for o in ops {
            apply(&mut store, o);
        }
        prop_assert_eq!(store.revision(), n);
    }

    /// PROPERTY: removing an id never touches lines with other ids.
    #[test]
    fn property_remove_only_touches_matching_ids(
        keep in ident(),
        drop in ident(),
    ) {
        prop_assume!(keep != drop);

        let mut store = ProjectStore::with_token_source(Box::new(FixedTokens::single(1000)));
        store.add_equipment(Equipment { id: keep.clone(), quantity: 1, ..Equipment::default() });
        store.add_equipment(Equipment { id: drop.clone(), quantity: 1, ..Equipment::default() });
        store.add_equipment(Equipment { id: drop.clone(), quantity: 1, ..Equipment::default() });

        store.remove_equipment(&drop);

        let ids: Vec<String> = store.state().inventory.iter().map(|i| i.id.clone()).collect();
        prop_assert_eq!(ids, vec![keep]);
    }
}
