//! Analysis tab: the full consultancy findings report.
//!
//! Reads the state snapshot and the analyzer output; never mutates either.

use manifold::domain::value_objects::ProjectCode;
use manifold::{ProjectState, ReportFindings};

use super::{baseline, compliance, inventory, inr};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_report(
    state: &ProjectState,
    findings: &ReportFindings,
    code: &ProjectCode,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    let mut header = CommandHeader::new(Icon::Report, "Manifold Analysis");
    header.add("Project", code.as_str());
    if let Some(brief) = &state.brief {
        header.add("Client", brief.client_name.clone());
        header.add("Site", format!("{}, {}", brief.site_address, brief.city));
    }
    out.push_str(&header.render(supports_color, supports_unicode));
    out.push('\n');

    match (&state.brief, &state.design) {
        (Some(brief), Some(design)) => {
            out.push_str(&baseline::render_baseline(
                brief,
                design,
                supports_color,
                supports_unicode,
            ));
        }
        _ => {
            out.push_str(
                &ColoredText::dim("No brief captured yet; baseline unavailable.\n")
                    .render(supports_color),
            );
        }
    }
    out.push('\n');

    out.push_str(&inventory::render_inventory(
        state,
        supports_color,
        supports_unicode,
    ));
    out.push('\n');

    out.push_str(&compliance::render_compliance(
        state.compliance.as_ref(),
        supports_color,
        supports_unicode,
    ));
    out.push('\n');

    out.push_str(&render_findings(findings, supports_color, supports_unicode));
    out
}

fn render_findings(
    findings: &ReportFindings,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if findings.is_empty() {
        let mut summary = ResultSummary::success("No Findings");
        summary.add_info("No cash leaks or optimization items identified.");
        return summary.render(supports_color, supports_unicode);
    }

    let mut out = String::new();

    if !findings.leaks.is_empty() {
        let title = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning("Cash Leaks")
                .bold()
                .render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Warning);
        b.add_empty();
        for leak in &findings.leaks {
            b.add_line(format!("{}  {}", leak.category, inr(leak.impact_amount)));
            b.add_line(format!("  {}", leak.description));
            b.add_line(
                ColoredText::dim(format!("  {}", leak.justification)).render(supports_color),
            );
        }
        b.add_empty();
        b.add_line(format!(
            "Total avoidable spend: {}",
            inr(findings.total_leak_amount())
        ));
        out.push_str(&b.render(supports_color, supports_unicode));
        out.push('\n');
    }

    if !findings.suggestions.is_empty() {
        let title = format!(
            "{} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::info("Optimization Suggestions")
                .bold()
                .render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Info);
        b.add_empty();
        for suggestion in &findings.suggestions {
            b.add_line(format!(
                "[{}] {}",
                suggestion.risk_level, suggestion.title
            ));
            b.add_line(format!("  Basis: {}", suggestion.basis));
            if suggestion.cost_impact > 0.0 {
                b.add_line(format!("  Saves: {}", inr(suggestion.cost_impact)));
            }
            b.add_line(
                ColoredText::dim(format!(
                    "  Energy: {}  Compliance: {}",
                    suggestion.energy_impact, suggestion.compliance_impact
                ))
                .render(supports_color),
            );
        }
        out.push_str(&b.render(supports_color, supports_unicode));
    }

    out
}
