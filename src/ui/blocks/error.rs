//! Error block - the visible channel for boundary validation failures.

use manifold::ManifoldError;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Render a rejected input as a red box with a recovery hint.
pub fn render_error_block(
    error: &ManifoldError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = format!(
        "{} {}",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error("Not saved").bold().render(supports_color)
    );

    let mut b = Box::with_title(title).style(BoxStyle::Error);
    b.add_empty();
    b.add_line(error.to_string());

    if let Some(hint) = recovery_hint(error) {
        b.add_empty();
        b.add_line(format!(
            "{} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hint).render(supports_color)
        ));
    }

    b.render(supports_color, supports_unicode)
}

fn recovery_hint(error: &ManifoldError) -> Option<&'static str> {
    match error {
        ManifoldError::Validation { .. } => Some("Re-run the form with a corrected value."),
        ManifoldError::DuplicateEquipmentId { .. } => {
            Some("Pick an unused line id, or remove the existing line first.")
        }
        _ => None,
    }
}
