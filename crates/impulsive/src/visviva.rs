//! Instantaneous orbital speed from the vis-viva equation.

use maneuver_core::rounding::round2;
use maneuver_orbits::OrbitParameters;

use crate::DomainError;

/// Instantaneous orbital speed in m/s, rounded to two decimals.
///
/// Circular orbits (exact apoapsis == periapsis) evaluate `sqrt(mu / a)`
/// and ignore the stored current radius; elliptical orbits evaluate
/// `sqrt(mu * (2/r - 1/a))` at the current radius `r`.
///
/// A non-positive `mu` or a negative radicand (an orbit whose current
/// radius cannot belong to its ellipse) is reported as a [`DomainError`]
/// instead of propagating NaN.
pub fn speed(mu_m3_s2: f64, orbit: &OrbitParameters) -> Result<f64, DomainError> {
    if !(mu_m3_s2 > 0.0) {
        return Err(DomainError::NonPositiveMu(mu_m3_s2));
    }

    let a = orbit.semi_major_axis_m();
    let v_squared = if orbit.is_circular() {
        mu_m3_s2 / a
    } else {
        mu_m3_s2 * (2.0 / orbit.radius_m - 1.0 / a)
    };

    if v_squared < 0.0 || !v_squared.is_finite() {
        return Err(DomainError::NonPhysicalOrbit {
            radius_m: orbit.radius_m,
            semi_major_axis_m: a,
        });
    }

    Ok(round2(v_squared.sqrt()))
}
