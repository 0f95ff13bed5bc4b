//! Compliance checklist flow for the BOQ tab.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use manifold::domain::value_objects::FireNocStatus;
use manifold::{ComplianceStatus, IntakeEvent, SessionController};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::ManifoldTheme;
use crate::ui::views;

pub fn run(controller: &mut SessionController, ui: &UiContext) -> Result<()> {
    let theme = ManifoldTheme::new(ui.unicode);

    let header = CommandHeader::new(Icon::Compliance, "Statutory Compliance");
    print!("{}", header.render(ui.color, ui.unicode));

    let existing = controller
        .state()
        .compliance
        .clone()
        .unwrap_or_default();

    let nbc_compliant = Confirm::with_theme(&theme)
        .with_prompt("NBC compliant?")
        .default(existing.nbc_compliant)
        .interact()?;
    let ecbc_compliant = Confirm::with_theme(&theme)
        .with_prompt("ECBC compliant?")
        .default(existing.ecbc_compliant)
        .interact()?;

    let fire_noc_status = {
        let labels: Vec<&str> = FireNocStatus::ALL.iter().map(|s| s.display_name()).collect();
        let default = FireNocStatus::ALL
            .iter()
            .position(|s| *s == existing.fire_noc_status)
            .unwrap_or(0);
        let idx = Select::with_theme(&theme)
            .with_prompt("Fire NOC status")
            .items(&labels)
            .default(default)
            .interact()?;
        FireNocStatus::ALL[idx]
    };

    let moef_clearance = Confirm::with_theme(&theme)
        .with_prompt("MoEF clearance obtained?")
        .default(existing.moef_clearance)
        .interact()?;

    let refrigerant_type: String = {
        let default = if existing.refrigerant_type.is_empty() {
            "R-410A".to_string()
        } else {
            existing.refrigerant_type.clone()
        };
        Input::with_theme(&theme)
            .with_prompt("Refrigerant type")
            .default(default)
            .interact_text()?
    };

    let municipal_approval: String = Input::with_theme(&theme)
        .with_prompt("Municipal approval reference")
        .allow_empty(true)
        .interact_text()?;

    let status = ComplianceStatus {
        nbc_compliant,
        ecbc_compliant,
        fire_noc_status,
        moef_clearance,
        refrigerant_type,
        municipal_approval,
    };

    controller.handle(IntakeEvent::SaveCompliance(status))?;

    println!();
    print!(
        "{}",
        views::compliance::render_compliance(
            controller.state().compliance.as_ref(),
            ui.color,
            ui.unicode,
        )
    );
    Ok(())
}
