//! Ports - interfaces for the non-deterministic inputs the domain needs
//!
//! The derivation engine and the controller both depend on values the domain
//! cannot compute (a random drawing token, the calendar year). Those come in
//! through these ports so the services stay deterministic under test.

mod clock;
mod reference;

pub use clock::{Clock, FixedClock, SystemClock};
pub use reference::{FixedTokens, ReferenceTokenSource, ThreadRngTokens};
