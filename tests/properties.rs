//! Property tests for Manifold.
//!
//! Properties use randomized input generation to protect the store and
//! derivation invariants: "design iff brief", order preservation, totality
//! (no operation panics on any input).
//!
//! Run with: `cargo test --test properties`

#[path = "properties/baseline.rs"]
mod baseline;

#[path = "properties/intake.rs"]
mod intake;

#[path = "properties/store.rs"]
mod store;
