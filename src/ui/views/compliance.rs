//! Compliance checklist rendering.

use manifold::ComplianceStatus;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_compliance(
    compliance: Option<&ComplianceStatus>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut b = Box::with_title(
        ColoredText::info("Statutory Compliance")
            .bold()
            .render(supports_color),
    );

    let Some(status) = compliance else {
        b.add_empty();
        b.add_line(ColoredText::dim("Compliance checklist not captured yet.").render(supports_color));
        return b.render(supports_color, supports_unicode);
    };

    b = b.style(if status.is_clear() {
        BoxStyle::Success
    } else {
        BoxStyle::Warning
    });

    b.add_empty();
    b.add_line(check("NBC compliant", status.nbc_compliant, supports_color, supports_unicode));
    b.add_line(check("ECBC compliant", status.ecbc_compliant, supports_color, supports_unicode));
    b.add_line(check(
        "Fire NOC resolved",
        status.fire_noc_status.is_resolved(),
        supports_color,
        supports_unicode,
    ));
    b.add_line(format!("  ({})", status.fire_noc_status));
    b.add_line(check("MoEF clearance", status.moef_clearance, supports_color, supports_unicode));
    b.add_empty();
    b.add_line(format!("Refrigerant: {}", display_or_dash(&status.refrigerant_type)));
    b.add_line(format!(
        "Municipal approval: {}",
        display_or_dash(&status.municipal_approval)
    ));

    b.render(supports_color, supports_unicode)
}

fn check(label: &str, ok: bool, supports_color: bool, supports_unicode: bool) -> String {
    let icon = if ok { Icon::Success } else { Icon::Pending };
    format!("{} {}", icon.colored(supports_color, supports_unicode), label)
}

fn display_or_dash(value: &str) -> &str {
    if value.trim().is_empty() {
        "-"
    } else {
        value
    }
}
