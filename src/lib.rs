//! Maneuver calculation logic lives in the member crates; this façade
//! re-exports them under one import path so multiple front-ends
//! (CLI, GUI, web) can share it.

pub use maneuver_config as config;
pub use maneuver_core::{constants, rounding, time, units};
pub use maneuver_impulsive as impulsive;
pub use maneuver_newton as newton;
pub use maneuver_orbits as orbits;

/// Returns the version of the library for smoke tests while scaffolding.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
