//! Project Code Value Object
//!
//! Display-only session identifier shown in the studio status line. Derived
//! from the saved brief and the calendar year, never stored on the aggregate.

use std::fmt;

/// Display code for the current intake session
///
/// Reads as `ID_<CITY>_<year>` once a brief with a client name has been
/// saved, and as a fixed placeholder before that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectCode(String);

impl ProjectCode {
    /// Code shown before any brief has been captured
    pub const PLACEHOLDER: &'static str = "Project_Initial";

    /// Placeholder code for a session with no saved brief
    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_string())
    }

    /// Code for a briefed session: `ID_<CITY>_<year>`
    pub fn for_site(city: &str, year: i32) -> Self {
        Self(format!("ID_{}_{}", city.to_uppercase(), year))
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when this is the pre-brief placeholder
    pub fn is_placeholder(&self) -> bool {
        self.0 == Self::PLACEHOLDER
    }
}

impl fmt::Display for ProjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProjectCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
