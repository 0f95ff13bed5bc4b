//! Interactive studio: the three-tab intake loop.
//!
//! Tabs mirror the intake flow - brief capture, bill of quantities with the
//! compliance checklist, and the analysis report. Any tab is reachable from
//! any tab; the session ends only on Quit.

mod brief_form;
mod compliance_form;
mod inventory_form;

use std::path::Path;

use anyhow::Result;
use dialoguer::Select;
use is_terminal::IsTerminal;
use manifold::domain::services::analyze;
use manifold::{Config, SessionController, Tab};

use crate::cli::ColorWhen;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::ManifoldTheme;
use crate::ui::views;

pub fn cmd_studio(
    cwd: &Path,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
    ascii: bool,
) -> Result<()> {
    let config = Config::load_or_default(Some(cwd));
    let ui = UiContext::new(json, verbose, color, ascii, &config);

    if ui.json {
        // Machine callers get a state event, not an interactive session.
        let output = serde_json::json!({
            "event": "studio",
            "interactive": false,
            "reason": "json output requested",
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if !std::io::stdin().is_terminal() {
        println!("No terminal attached.");
        println!("Try: `manifold demo` or `manifold --help`");
        return Ok(());
    }

    print!("{}", views::studio::render_banner(ui.color, ui.unicode));
    if ui.verbose > 0 {
        println!(
            "{}",
            ColoredText::dim(format!(
                "Analyzer: COP floor {:.1}, lead-time window {}w, capacity margin {:.1} TR, budget tolerance {:.0}%",
                config.analysis.min_efficiency_cop,
                config.analysis.max_lead_time_weeks,
                config.analysis.capacity_margin_tr,
                config.analysis.budget_tolerance_pct,
            ))
            .render(ui.color)
        );
    }
    println!();

    let mut controller = SessionController::new();
    let theme = ManifoldTheme::new(ui.unicode);

    loop {
        print!(
            "{}",
            views::studio::render_status_line(
                controller.state(),
                &controller.project_code(),
                ui.color,
                ui.unicode,
            )
        );

        let items = vec![
            "[1] Project brief",
            "[2] Bill of quantities",
            "[3] Analysis",
            "[4] Quit",
        ];

        let default = match controller.active_tab() {
            Tab::Setup => 0,
            Tab::Boq => 1,
            Tab::Analysis => 2,
        };

        let selection = Select::with_theme(&theme)
            .with_prompt("Where to?")
            .items(&items)
            .default(default)
            .interact()?;

        match selection {
            0 => {
                controller.switch_tab(Tab::Setup);
                brief_form::run(&mut controller, &ui)?;
            }
            1 => {
                controller.switch_tab(Tab::Boq);
                boq_tab(&mut controller, &ui)?;
            }
            2 => {
                controller.switch_tab(Tab::Analysis);
                analysis_tab(&controller, &ui, &config);
            }
            _ => break,
        }
        println!();
    }

    print!("{}", session_summary(&controller, &ui));
    Ok(())
}

fn boq_tab(controller: &mut SessionController, ui: &UiContext) -> Result<()> {
    let theme = ManifoldTheme::new(ui.unicode);

    let mut header = CommandHeader::new(Icon::Boq, "Bill of Quantities");
    header.add("Lines", controller.state().inventory.len().to_string());
    print!("{}", header.render(ui.color, ui.unicode));

    loop {
        let items = vec![
            "[1] Add equipment line",
            "[2] Remove equipment line",
            "[3] Show inventory",
            "[4] Compliance checklist",
            "[5] Back",
        ];

        let selection = Select::with_theme(&theme)
            .with_prompt("Bill of quantities")
            .items(&items)
            .default(0)
            .interact()?;

        match selection {
            0 => inventory_form::run_add(controller, ui)?,
            1 => inventory_form::run_remove(controller, ui)?,
            2 => print!(
                "{}",
                views::inventory::render_inventory(controller.state(), ui.color, ui.unicode)
            ),
            3 => compliance_form::run(controller, ui)?,
            _ => return Ok(()),
        }
        println!();
    }
}

fn analysis_tab(controller: &SessionController, ui: &UiContext, config: &Config) {
    let state = controller.state();
    let findings = analyze(state, &config.analysis);
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
}

fn session_summary(controller: &SessionController, ui: &UiContext) -> String {
    let state = controller.state();

    let mut summary = if state.has_brief() {
        ResultSummary::success("Session Summary")
    } else {
        ResultSummary::partial("Session Summary")
    };

    summary.add_stat("equipment lines", state.inventory.len());
    if let Some(design) = &state.design {
        summary.add_stat(
            "TR baseline derived",
            design.total_cooling_load_tr.max(0) as usize,
        );
    }

    if state.compliance.is_none() {
        summary.add_warning("Compliance checklist not captured");
    }
    summary.with_next_step("State is discarded on exit; note down the report first.");

    summary.render(ui.color, ui.unicode)
}
