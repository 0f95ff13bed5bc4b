//! The canonical end-to-end intake journey.

use manifold::domain::ports::{FixedClock, FixedTokens};
use manifold::{
    Equipment, IntakeEvent, ManifoldError, ProjectBrief, ProjectStore, SessionController,
};

fn controller() -> SessionController {
    SessionController::with_parts(
        ProjectStore::with_token_source(Box::new(FixedTokens::single(4821))),
        Box::new(FixedClock::new(2024)),
    )
}

fn pune_brief() -> ProjectBrief {
    ProjectBrief {
        site_address: "Plot 12, Hinjewadi Phase 2".to_string(),
        city: "Pune".to_string(),
        client_name: "Meridian Workspaces".to_string(),
        built_up_area: 6500.0,
        floors: 4,
        ..ProjectBrief::default()
    }
}

fn line(id: &str) -> Equipment {
    Equipment {
        id: id.to_string(),
        category: "Chiller".to_string(),
        quantity: 1,
        ..Equipment::default()
    }
}

#[test]
fn scenario_empty_to_briefed_to_boq_and_back_to_empty_inventory() {
    let mut ctl = controller();

    // Empty session: no brief, no design, placeholder code.
    assert!(ctl.state().brief.is_none());
    assert!(ctl.state().design.is_none());
    assert_eq!(ctl.project_code().as_str(), "Project_Initial");

    // Save the brief; the baseline is derived alongside.
    ctl.handle(IntakeEvent::SaveBrief(pune_brief())).unwrap();
    let design = ctl.state().design.as_ref().unwrap();
    assert_eq!(design.total_cooling_load_tr, 20);
    assert_eq!(design.electrical_load_kw, 553);
    assert_eq!(ctl.project_code().as_str(), "ID_PUNE_2024");

    // Add one line, then remove it.
    ctl.handle(IntakeEvent::AddEquipment(line("eq1"))).unwrap();
    assert_eq!(ctl.state().inventory.len(), 1);

    ctl.handle(IntakeEvent::RemoveEquipment("eq1".to_string()))
        .unwrap();
    assert_eq!(ctl.state().inventory.len(), 0);

    // The brief and design survive inventory edits.
    assert!(ctl.state().brief.is_some());
    assert!(ctl.state().design.is_some());
}

#[test]
fn scenario_duplicate_id_refused_then_accepted_after_removal() {
    let mut ctl = controller();
    ctl.handle(IntakeEvent::AddEquipment(line("eq1"))).unwrap();

    let err = ctl
        .handle(IntakeEvent::AddEquipment(line("eq1")))
        .unwrap_err();
    assert!(matches!(err, ManifoldError::DuplicateEquipmentId { .. }));
    assert_eq!(ctl.state().inventory.len(), 1);

    ctl.handle(IntakeEvent::RemoveEquipment("eq1".to_string()))
        .unwrap();
    ctl.handle(IntakeEvent::AddEquipment(line("eq1"))).unwrap();
    assert_eq!(ctl.state().inventory.len(), 1);
}
