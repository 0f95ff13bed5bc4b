//! Wholesale-replace semantics across brief revisions.

use manifold::domain::ports::{FixedClock, FixedTokens};
use manifold::{IntakeEvent, ProjectBrief, ProjectStore, SessionController};

fn controller_with_tokens(tokens: Vec<u16>) -> SessionController {
    SessionController::with_parts(
        ProjectStore::with_token_source(Box::new(FixedTokens::new(tokens))),
        Box::new(FixedClock::new(2024)),
    )
}

fn brief(city: &str, area: f64, budget: f64) -> ProjectBrief {
    ProjectBrief {
        site_address: "Survey 41".to_string(),
        city: city.to_string(),
        client_name: "Acme Realty".to_string(),
        built_up_area: area,
        floors: 2,
        target_budget: budget,
        ..ProjectBrief::default()
    }
}

#[test]
fn scenario_second_brief_replaces_and_rederives_everything() {
    let mut ctl = controller_with_tokens(vec![1111, 2222]);

    ctl.handle(IntakeEvent::SaveBrief(brief("Mumbai", 3250.0, 900_000.0)))
        .unwrap();
    assert_eq!(
        ctl.state().design.as_ref().unwrap().cad_reference,
        "ID-MUM-1111"
    );
    assert_eq!(ctl.state().design.as_ref().unwrap().total_cooling_load_tr, 10);

    ctl.handle(IntakeEvent::SaveBrief(brief("Pune", 6500.0, 0.0)))
        .unwrap();

    let state = ctl.state();
    let saved = state.brief.as_ref().unwrap();
    let design = state.design.as_ref().unwrap();

    // No field merging: the Mumbai budget is gone with the Mumbai brief.
    assert_eq!(saved.city, "Pune");
    assert_eq!(saved.target_budget, 0.0);

    // The design is recomputed, not merged: new reference, new loads.
    assert_eq!(design.cad_reference, "ID-PUN-2222");
    assert_eq!(design.total_cooling_load_tr, 20);
    assert_eq!(design.electrical_load_kw, 553);
    assert_eq!(
        design.design_assumptions,
        "Market Standard Baseline. Site: Pune."
    );
}
