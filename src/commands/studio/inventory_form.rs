//! Equipment add/remove flows for the BOQ tab.

use anyhow::Result;
use dialoguer::{Confirm, FuzzySelect, Input, Select};
use manifold::domain::value_objects::{EfficiencyType, Origin};
use manifold::{Equipment, IntakeEvent, SessionController};

use crate::ui::blocks::error::render_error_block;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::ManifoldTheme;

pub fn run_add(controller: &mut SessionController, ui: &UiContext) -> Result<()> {
    let theme = ManifoldTheme::new(ui.unicode);

    loop {
        let item = collect(controller, &theme)?;

        match controller.handle(IntakeEvent::AddEquipment(item)) {
            Ok(()) => {
                let count = controller.state().inventory.len();
                println!(
                    "{}",
                    ColoredText::success(format!("Line added ({} in BOQ).", count))
                        .render(ui.color)
                );
                return Ok(());
            }
            Err(err) => {
                print!("{}", render_error_block(&err, ui.color, ui.unicode));
                let retry = Confirm::with_theme(&theme)
                    .with_prompt("Re-enter the equipment line?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(());
                }
            }
        }
    }
}

pub fn run_remove(controller: &mut SessionController, ui: &UiContext) -> Result<()> {
    let inventory = &controller.state().inventory;
    if inventory.is_empty() {
        println!(
            "{}",
            ColoredText::dim("Nothing to remove; the BOQ is empty.").render(ui.color)
        );
        return Ok(());
    }

    let theme = ManifoldTheme::new(ui.unicode);
    let mut labels: Vec<String> = inventory
        .iter()
        .map(|item| {
            format!(
                "{}  {} ({} x {:.1} {})",
                item.id, item.category, item.quantity, item.capacity, item.capacity_unit
            )
        })
        .collect();
    labels.push("(cancel)".to_string());

    let selection = FuzzySelect::with_theme(&theme)
        .with_prompt("Remove which line?")
        .items(&labels)
        .default(0)
        .interact()?;

    if selection >= controller.state().inventory.len() {
        return Ok(());
    }

    let id = controller.state().inventory[selection].id.clone();
    controller.handle(IntakeEvent::RemoveEquipment(id.clone()))?;
    println!(
        "{}",
        ColoredText::success(format!("Removed '{}'.", id)).render(ui.color)
    );
    Ok(())
}

fn collect(controller: &SessionController, theme: &ManifoldTheme) -> Result<Equipment> {
    let suggested_id = format!("eq-{}", controller.state().inventory.len() + 1);

    let id: String = Input::with_theme(theme)
        .with_prompt("Line id")
        .default(suggested_id)
        .interact_text()?;
    let category: String = Input::with_theme(theme)
        .with_prompt("Category")
        .default("Chiller".to_string())
        .interact_text()?;
    let specification: String = Input::with_theme(theme)
        .with_prompt("Specification")
        .allow_empty(true)
        .interact_text()?;

    let capacity: f64 = Input::with_theme(theme)
        .with_prompt("Capacity")
        .interact_text()?;
    let capacity_unit: String = Input::with_theme(theme)
        .with_prompt("Capacity unit")
        .default("TR".to_string())
        .interact_text()?;
    let quantity: u32 = Input::with_theme(theme)
        .with_prompt("Quantity")
        .default(1)
        .interact_text()?;

    let supplier: String = Input::with_theme(theme)
        .with_prompt("Supplier")
        .allow_empty(true)
        .interact_text()?;
    let unit_price: f64 = Input::with_theme(theme)
        .with_prompt("Unit price (INR)")
        .interact_text()?;
    let warranty_years: u32 = Input::with_theme(theme)
        .with_prompt("Warranty (years)")
        .default(1)
        .interact_text()?;

    let efficiency_type = {
        let labels: Vec<&str> = EfficiencyType::ALL.iter().map(|e| e.display_name()).collect();
        let idx = Select::with_theme(theme)
            .with_prompt("Efficiency metric")
            .items(&labels)
            .default(0)
            .interact()?;
        EfficiencyType::ALL[idx]
    };
    let efficiency_value: f64 = Input::with_theme(theme)
        .with_prompt(format!("Efficiency value ({})", efficiency_type))
        .default(0.0)
        .interact_text()?;

    let lead_time_weeks: u32 = Input::with_theme(theme)
        .with_prompt("Lead time (weeks)")
        .default(4)
        .interact_text()?;
    let maintenance_notes: String = Input::with_theme(theme)
        .with_prompt("Maintenance notes")
        .allow_empty(true)
        .interact_text()?;

    let origin = {
        let labels = ["Local", "Imported"];
        let idx = Select::with_theme(theme)
            .with_prompt("Origin")
            .items(&labels)
            .default(0)
            .interact()?;
        if idx == 1 {
            Origin::Imported
        } else {
            Origin::Local
        }
    };

    Ok(Equipment {
        id,
        category,
        specification,
        capacity,
        capacity_unit,
        quantity,
        supplier,
        unit_price,
        warranty_years,
        efficiency_value,
        efficiency_type,
        lead_time_weeks,
        maintenance_notes,
        origin,
    })
}
