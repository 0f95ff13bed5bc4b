//! Project brief form.
//!
//! Collects the full brief in one pass, routes it through the controller,
//! and shows the derived engineering baseline on success. A boundary
//! rejection renders the error block and offers a re-run; the aggregate is
//! untouched until a brief passes validation.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use manifold::domain::value_objects::{AreaUnit, BuildingType};
use manifold::{IntakeEvent, ProjectBrief, SessionController};

use crate::ui::blocks::error::render_error_block;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::ManifoldTheme;
use crate::ui::views;

pub fn run(controller: &mut SessionController, ui: &UiContext) -> Result<()> {
    let theme = ManifoldTheme::new(ui.unicode);

    let mut header = CommandHeader::new(Icon::Brief, "Project Brief");
    if controller.state().has_brief() {
        header.add("Mode", "Replace existing brief");
    }
    print!("{}", header.render(ui.color, ui.unicode));

    loop {
        let brief = collect(controller, &theme)?;

        match controller.handle(IntakeEvent::SaveBrief(brief)) {
            Ok(()) => {
                let state = controller.state();
                if let (Some(brief), Some(design)) = (&state.brief, &state.design) {
                    println!();
                    print!(
                        "{}",
                        views::baseline::render_baseline(brief, design, ui.color, ui.unicode)
                    );
                }
                return Ok(());
            }
            Err(err) => {
                print!("{}", render_error_block(&err, ui.color, ui.unicode));
                let retry = Confirm::with_theme(&theme)
                    .with_prompt("Edit the brief again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(());
                }
            }
        }
    }
}

fn collect(controller: &SessionController, theme: &ManifoldTheme) -> Result<ProjectBrief> {
    // A saved brief pre-fills the form; saving always replaces it wholesale.
    let existing = controller.state().brief.clone().unwrap_or_default();

    let site_address = text(theme, "Site address", &existing.site_address, false)?;
    let city = text(theme, "City", &existing.city, false)?;

    let building_type = {
        let labels: Vec<&str> = BuildingType::ALL.iter().map(|b| b.display_name()).collect();
        let default = BuildingType::ALL
            .iter()
            .position(|b| *b == existing.building_type)
            .unwrap_or(0);
        let idx = Select::with_theme(theme)
            .with_prompt("Building type")
            .items(&labels)
            .default(default)
            .interact()?;
        BuildingType::ALL[idx]
    };

    let area_unit = {
        let labels = ["sq ft", "sq m"];
        let default = if existing.area_unit == AreaUnit::Sqm { 1 } else { 0 };
        let idx = Select::with_theme(theme)
            .with_prompt("Area unit")
            .items(&labels)
            .default(default)
            .interact()?;
        if idx == 1 {
            AreaUnit::Sqm
        } else {
            AreaUnit::Sqft
        }
    };

    let built_up_area = number_f64(
        theme,
        "Built-up area",
        positive_or_none(existing.built_up_area),
    )?;
    let floors = number_u32(theme, "Floor count", nonzero_or_none(existing.floors))?;

    let occupancy_type = text_or(theme, "Occupancy type", &existing.occupancy_type, "Office")?;
    let occupancy_density = number_f64(
        theme,
        "Occupancy density (persons per 100 sq ft)",
        positive_or_none(existing.occupancy_density).or(Some(4.0)),
    )?;
    let operating_hours = text_or(
        theme,
        "Operating hours",
        &existing.operating_hours,
        "09:00-21:00",
    )?;

    let target_budget = number_f64(
        theme,
        "Target budget (INR)",
        positive_or_none(existing.target_budget),
    )?;
    let target_timeline = text_or(theme, "Target timeline", &existing.target_timeline, "26 weeks")?;

    let client_name = text(theme, "Client name", &existing.client_name, false)?;
    let contractor_name = text(theme, "Contractor name", &existing.contractor_name, true)?;
    let performance_expectations = text(
        theme,
        "Performance expectations",
        &existing.performance_expectations,
        true,
    )?;

    Ok(ProjectBrief {
        site_address,
        city,
        building_type,
        built_up_area,
        area_unit,
        floors,
        occupancy_type,
        occupancy_density,
        operating_hours,
        target_budget,
        target_timeline,
        client_name,
        contractor_name,
        performance_expectations,
    })
}

fn text(theme: &ManifoldTheme, prompt: &str, default: &str, allow_empty: bool) -> Result<String> {
    let mut input = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(allow_empty);
    if !default.is_empty() {
        input = input.default(default.to_string());
    }
    Ok(input.interact_text()?)
}

fn text_or(theme: &ManifoldTheme, prompt: &str, existing: &str, fallback: &str) -> Result<String> {
    let default = if existing.is_empty() { fallback } else { existing };
    text(theme, prompt, default, false)
}

fn number_f64(theme: &ManifoldTheme, prompt: &str, default: Option<f64>) -> Result<f64> {
    let mut input = Input::<f64>::with_theme(theme).with_prompt(prompt);
    if let Some(value) = default {
        input = input.default(value);
    }
    Ok(input.interact_text()?)
}

fn number_u32(theme: &ManifoldTheme, prompt: &str, default: Option<u32>) -> Result<u32> {
    let mut input = Input::<u32>::with_theme(theme).with_prompt(prompt);
    if let Some(value) = default {
        input = input.default(value);
    }
    Ok(input.interact_text()?)
}

fn positive_or_none(value: f64) -> Option<f64> {
    (value > 0.0).then_some(value)
}

fn nonzero_or_none(value: u32) -> Option<u32> {
    (value > 0).then_some(value)
}
