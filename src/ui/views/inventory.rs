//! Bill-of-quantities listing.

use manifold::ProjectState;

use super::inr;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_inventory(
    state: &ProjectState,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut b = Box::with_title(
        ColoredText::info("Bill of Quantities")
            .bold()
            .render(supports_color),
    )
    .style(BoxStyle::Info);
    b.add_empty();

    if state.inventory.is_empty() {
        b.add_line(ColoredText::dim("No equipment lines yet.").render(supports_color));
        return b.render(supports_color, supports_unicode);
    }

    for item in &state.inventory {
        b.add_line(format!(
            "{:<10} {:<16} {} x {:.1} {}  {}  [{}]",
            item.id,
            item.category,
            item.quantity,
            item.capacity,
            item.capacity_unit,
            inr(item.line_value()),
            item.origin
        ));
    }

    b.add_empty();
    b.add_line(format!(
        "{} lines  |  BOQ value {}  |  {:.1} TR installed",
        state.inventory.len(),
        inr(state.inventory_value()),
        state.installed_capacity_tr()
    ));

    b.render(supports_color, supports_unicode)
}
