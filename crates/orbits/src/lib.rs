//! Orbit geometry primitives shared by the transfer planner.

use std::f64::consts::PI;

/// Body-centred orbit geometry: absolute radii in metres, inclination in degrees.
///
/// Construction performs no validation. Callers are responsible for keeping
/// `periapsis_m <= radius_m <= apoapsis_m`; negative or inconsistent radii
/// propagate into downstream computations unchanged and surface there as
/// domain errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParameters {
    /// Current radial distance from the body's centre (m).
    pub radius_m: f64,
    /// Apoapsis distance from the body's centre (m).
    pub apoapsis_m: f64,
    /// Periapsis distance from the body's centre (m).
    pub periapsis_m: f64,
    /// Orbital inclination (degrees).
    pub inclination_deg: f64,
}

impl OrbitParameters {
    /// Build from radii that are already body-centred.
    pub fn new(radius_m: f64, apoapsis_m: f64, periapsis_m: f64, inclination_deg: f64) -> Self {
        Self {
            radius_m,
            apoapsis_m,
            periapsis_m,
            inclination_deg,
        }
    }

    /// Build from altitudes above the body surface: `body_radius_m` is added
    /// to each radial input, inclination passes through unchanged.
    pub fn from_surface(
        body_radius_m: f64,
        altitude_m: f64,
        apoapsis_altitude_m: f64,
        periapsis_altitude_m: f64,
        inclination_deg: f64,
    ) -> Self {
        Self {
            radius_m: altitude_m + body_radius_m,
            apoapsis_m: apoapsis_altitude_m + body_radius_m,
            periapsis_m: periapsis_altitude_m + body_radius_m,
            inclination_deg,
        }
    }

    /// Semi-major axis, `(apoapsis + periapsis) / 2` (m).
    pub fn semi_major_axis_m(&self) -> f64 {
        (self.apoapsis_m + self.periapsis_m) / 2.0
    }

    /// Whether the orbit is circular.
    ///
    /// Exact float equality on purpose: branch selection in the transfer
    /// planner keys off this test, and an epsilon comparison would silently
    /// reroute near-circular orbits.
    pub fn is_circular(&self) -> bool {
        self.apoapsis_m == self.periapsis_m
    }

    /// Orbital period `2π·sqrt(a³/μ)` in seconds (Kepler's third law).
    pub fn period_s(&self, mu_m3_s2: f64) -> f64 {
        2.0 * PI * (self.semi_major_axis_m().powi(3) / mu_m3_s2).sqrt()
    }
}
