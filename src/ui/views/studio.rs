//! Studio chrome: banner and status line.

use manifold::domain::value_objects::ProjectCode;
use manifold::ProjectState;

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_banner(supports_color: bool, supports_unicode: bool) -> String {
    let mut b = Box::with_title(
        ColoredText::info("Manifold Studio")
            .bold()
            .render(supports_color),
    )
    .style(BoxStyle::Info);
    b.add_empty();
    b.add_line("HVAC consultancy intake: brief, bill of quantities, analysis.");
    b.add_line(
        ColoredText::dim("State lives for this session only; nothing is written to disk.")
            .render(supports_color),
    );
    b.render(supports_color, supports_unicode)
}

/// One-line session footer: slot indicators plus the project code.
pub fn render_status_line(
    state: &ProjectState,
    code: &ProjectCode,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let brief = slot(state.has_brief(), "Brief", supports_color, supports_unicode);
    let inventory = slot(
        !state.inventory.is_empty(),
        "Inventory",
        supports_color,
        supports_unicode,
    );
    let legal = slot(
        state.compliance.is_some(),
        "Legal",
        supports_color,
        supports_unicode,
    );

    format!(
        "{}  {}  {}   {}\n",
        brief,
        inventory,
        legal,
        ColoredText::dim(code.as_str()).render(supports_color)
    )
}

fn slot(filled: bool, label: &str, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match (filled, supports_unicode) {
        (true, true) => theme::icons::FILLED,
        (false, true) => theme::icons::EMPTY,
        (true, false) => theme::icons_ascii::FILLED,
        (false, false) => theme::icons_ascii::EMPTY,
    };

    let icon = if filled {
        ColoredText::success(icon).render(supports_color)
    } else {
        ColoredText::dim(icon).render(supports_color)
    };

    format!("{} {}", icon, label)
}
