//! Policies - business rules applied at the input-surface boundary

mod intake;

pub use intake::{validate_brief, validate_equipment};
