use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Brief,
    Boq,
    Compliance,
    Report,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Brief) => theme::icons::BRIEF,
            (true, Icon::Boq) => theme::icons::BOQ,
            (true, Icon::Compliance) => theme::icons::COMPLIANCE,
            (true, Icon::Report) => theme::icons::REPORT,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Brief) => theme::icons_ascii::BRIEF,
            (false, Icon::Boq) => theme::icons_ascii::BOQ,
            (false, Icon::Compliance) => theme::icons_ascii::COMPLIANCE,
            (false, Icon::Report) => theme::icons_ascii::REPORT,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Brief | Icon::Boq | Icon::Compliance | Icon::Report => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
