//! Shared test fixtures for PodForge crates.
//!
//! - [`fixtures`] - player, cube and request builders, canonical scenarios
//! - [`invariants`] - checks every result invariant of a round outcome
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! podforge-test = { workspace = true }
//! ```

pub mod fixtures;
pub mod invariants;

pub use fixtures::{
    cubes, field, limited_cube, preference_scenario, shortfall_scenario, tiered_scenario,
};
pub use invariants::{assert_round_invariants, check_round_invariants};
