//! Engineering baseline card shown after a brief is saved.

use manifold::{DesignInputs, ProjectBrief};

use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_baseline(
    brief: &ProjectBrief,
    design: &DesignInputs,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut b = Box::with_title(
        ColoredText::info("Engineering Baseline")
            .bold()
            .render(supports_color),
    )
    .style(BoxStyle::Info);

    b.add_empty();
    b.add_line(format!(
        "Based on {} parameters, the model projects a {} TR load",
        brief.city, design.total_cooling_load_tr
    ));
    b.add_line(format!(
        "with {} kW peak power.",
        design.electrical_load_kw
    ));
    b.add_empty();
    b.add_line(format!("CAD reference: {}", design.cad_reference));
    b.add_line(format!(
        "Mechanical layout: {}",
        design.mechanical_layout_status
    ));
    b.add_line(
        ColoredText::dim(design.design_assumptions.as_str()).render(supports_color),
    );

    b.render(supports_color, supports_unicode)
}
