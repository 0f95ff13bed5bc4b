//! Demo command: a canned intake session rendered end to end.
//!
//! Runs the same controller path the studio uses, with a fixed reference
//! token so the derived CAD reference is reproducible, then renders the
//! analysis report (or emits it as JSON).

use std::path::Path;

use anyhow::Result;
use manifold::domain::ports::{FixedTokens, SystemClock};
use manifold::domain::services::analyze;
use manifold::domain::value_objects::{EfficiencyType, FireNocStatus, Origin};
use manifold::{
    ComplianceStatus, Config, Equipment, IntakeEvent, ProjectBrief, ProjectStore,
    SessionController,
};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::views;

pub fn cmd_demo(cwd: &Path, json: bool, color: Option<ColorWhen>, ascii: bool) -> Result<()> {
    let config = Config::load_or_default(Some(cwd));
    let ui = UiContext::new(json, 0, color, ascii, &config);

    let controller = sample_session()?;
    let state = controller.state();
    let findings = analyze(state, &config.analysis);

    if ui.json {
        let output = serde_json::json!({
            "event": "demo",
            "projectCode": controller.project_code().as_str(),
            "state": state,
            "findings": findings,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    print!(
        "{}",
        views::report::render_report(
            state,
            &findings,
            &controller.project_code(),
            ui.color,
            ui.unicode,
        )
    );
    Ok(())
}

/// Build the sample session through the controller, as the studio would.
fn sample_session() -> Result<SessionController> {
    let store = ProjectStore::with_token_source(Box::new(FixedTokens::single(4821)));
    let mut controller = SessionController::with_parts(store, Box::new(SystemClock::new()));

    controller.handle(IntakeEvent::SaveBrief(ProjectBrief {
        site_address: "Plot 12, Hinjewadi Phase 2".to_string(),
        city: "Pune".to_string(),
        built_up_area: 6500.0,
        floors: 4,
        occupancy_type: "Office".to_string(),
        occupancy_density: 4.0,
        operating_hours: "09:00-21:00".to_string(),
        target_budget: 2_000_000.0,
        target_timeline: "26 weeks".to_string(),
        client_name: "Meridian Workspaces".to_string(),
        contractor_name: "Shree Mechanical".to_string(),
        performance_expectations: "Tight humidity control on floors 2-3".to_string(),
        ..ProjectBrief::default()
    }))?;

    controller.handle(IntakeEvent::AddEquipment(Equipment {
        id: "ch-1".to_string(),
        category: "Chiller".to_string(),
        specification: "Water-cooled screw, R-134a".to_string(),
        capacity: 12.0,
        capacity_unit: "TR".to_string(),
        quantity: 2,
        supplier: "CoolServe".to_string(),
        unit_price: 780_000.0,
        warranty_years: 3,
        efficiency_value: 2.9,
        efficiency_type: EfficiencyType::Cop,
        lead_time_weeks: 6,
        maintenance_notes: "Quarterly descaling".to_string(),
        origin: Origin::Local,
    }))?;

    controller.handle(IntakeEvent::AddEquipment(Equipment {
        id: "ahu-1".to_string(),
        category: "AHU".to_string(),
        specification: "Double-skin, 5000 CFM".to_string(),
        capacity: 5000.0,
        capacity_unit: "CFM".to_string(),
        quantity: 4,
        supplier: "AirFab".to_string(),
        unit_price: 95_000.0,
        warranty_years: 2,
        efficiency_value: 0.0,
        efficiency_type: EfficiencyType::Cop,
        lead_time_weeks: 4,
        maintenance_notes: String::new(),
        origin: Origin::Local,
    }))?;

    controller.handle(IntakeEvent::AddEquipment(Equipment {
        id: "vrf-1".to_string(),
        category: "VRF".to_string(),
        specification: "Heat-recovery outdoor unit".to_string(),
        capacity: 8.0,
        capacity_unit: "TR".to_string(),
        quantity: 1,
        supplier: "OverseasCool".to_string(),
        unit_price: 520_000.0,
        warranty_years: 5,
        efficiency_value: 3.8,
        efficiency_type: EfficiencyType::Cop,
        lead_time_weeks: 14,
        maintenance_notes: "OEM AMC only".to_string(),
        origin: Origin::Imported,
    }))?;

    controller.handle(IntakeEvent::SaveCompliance(ComplianceStatus {
        nbc_compliant: true,
        ecbc_compliant: false,
        fire_noc_status: FireNocStatus::Pending,
        moef_clearance: true,
        refrigerant_type: "R-134a".to_string(),
        municipal_approval: String::new(),
    }))?;

    Ok(controller)
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifold::domain::services::AnalysisThresholds;
    use manifold::domain::value_objects::LeakCategory;

    #[test]
    fn sample_session_derives_the_pune_baseline() {
        let controller = sample_session().unwrap();
        let design = controller.state().design.as_ref().unwrap();

        assert_eq!(design.total_cooling_load_tr, 20);
        assert_eq!(design.electrical_load_kw, 553);
        assert_eq!(design.cad_reference, "ID-PUN-4821");
    }

    #[test]
    fn sample_session_triggers_every_leak_category() {
        let controller = sample_session().unwrap();
        let findings = analyze(controller.state(), &AnalysisThresholds::default());

        let categories: Vec<LeakCategory> =
            findings.leaks.iter().map(|l| l.category).collect();
        assert!(categories.contains(&LeakCategory::Procurement));
        assert!(categories.contains(&LeakCategory::Specification));
        assert!(categories.contains(&LeakCategory::Design));
        assert!(categories.contains(&LeakCategory::Execution));
    }

    #[test]
    fn sample_session_project_code_names_pune() {
        let controller = sample_session().unwrap();
        assert!(controller.project_code().as_str().starts_with("ID_PUNE_"));
    }
}
