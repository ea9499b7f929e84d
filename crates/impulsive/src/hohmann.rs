//! Two-impulse transfer planner between a departure orbit and a circular
//! target orbit.

use std::f64::consts::PI;

use maneuver_core::rounding::round2;
use maneuver_orbits::OrbitParameters;

use crate::DomainError;
use crate::visviva::speed;

/// Outcome of a planned two-burn transfer. All values carry two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferResult {
    /// First (injection) burn (m/s); sign follows the speed difference.
    pub dv1_m_s: f64,
    /// Second (circularization or plane-change) burn (m/s).
    pub dv2_m_s: f64,
    /// Plain sum of the two burn values (m/s).
    pub dv_total_m_s: f64,
    /// Half-period of the transfer ellipse spanning the current radii (s).
    pub time_taken_s: f64,
}

/// Plan a two-impulse transfer from `orbit1` onto the circular `orbit2`.
///
/// The branch is selected by comparing apoapsis radii, and the target orbit
/// must be exactly circular; any other geometry is rejected with
/// [`DomainError::UnsupportedGeometry`]. An inclination change between the
/// orbits is folded into the burn at the shared radius via the law of
/// cosines. Burn values keep their sign, so a transfer can legitimately
/// report a negative delta-v when the injection speed sits below the
/// departure speed.
pub fn transfer(
    mu_m3_s2: f64,
    orbit1: &OrbitParameters,
    orbit2: &OrbitParameters,
) -> Result<TransferResult, DomainError> {
    let delta_i_deg = orbit2.inclination_deg - orbit1.inclination_deg;
    let v1 = speed(mu_m3_s2, orbit1)?;
    let v2 = speed(mu_m3_s2, orbit2)?;

    let (dv1, dv2) = if orbit2.is_circular() && orbit1.apoapsis_m < orbit2.apoapsis_m {
        // Raising: injection ellipse from the departure orbit's current
        // radius up to the target radius, evaluated at its apoapsis.
        let injection = OrbitParameters::new(
            orbit2.radius_m,
            orbit2.radius_m,
            orbit1.radius_m,
            orbit1.inclination_deg,
        );
        let v_apoapsis = speed(mu_m3_s2, &injection)?;
        // The circularization burn uses the cosine law for every delta-i;
        // at zero it degenerates to |v2 - v_apoapsis|.
        (
            v_apoapsis - v1,
            plane_change(v2, v_apoapsis, delta_i_deg),
        )
    } else if orbit2.is_circular() && orbit1.apoapsis_m > orbit2.apoapsis_m {
        // Lowering: injection ellipse spans the departure apoapsis down to
        // the target radius; burns happen at its apoapsis and periapsis.
        let apoapsis_point = OrbitParameters::new(
            orbit1.apoapsis_m,
            orbit1.apoapsis_m,
            orbit2.apoapsis_m,
            orbit2.inclination_deg,
        );
        let periapsis_point = OrbitParameters::new(
            orbit2.apoapsis_m,
            orbit1.apoapsis_m,
            orbit2.apoapsis_m,
            orbit2.inclination_deg,
        );
        let v_apoapsis = speed(mu_m3_s2, &apoapsis_point)?;
        let v_periapsis = speed(mu_m3_s2, &periapsis_point)?;
        let dv1 = if delta_i_deg == 0.0 {
            v_apoapsis - v1
        } else {
            plane_change(v1, v_apoapsis, delta_i_deg)
        };
        (dv1, v_periapsis - v2)
    } else {
        return Err(DomainError::UnsupportedGeometry(
            "the target orbit must be circular, with an apoapsis distinct from the departure orbit's",
        ));
    };

    let dv1 = round2(dv1);
    let dv2 = round2(dv2);
    let time_taken_s =
        PI * ((orbit1.radius_m + orbit2.radius_m).powi(3) / (8.0 * mu_m3_s2)).sqrt();

    Ok(TransferResult {
        dv1_m_s: dv1,
        dv2_m_s: dv2,
        dv_total_m_s: round2(dv1 + dv2),
        time_taken_s: round2(time_taken_s),
    })
}

/// Magnitude of the vector difference between two speeds separated by a
/// plane-change angle (law of cosines).
fn plane_change(va: f64, vb: f64, delta_i_deg: f64) -> f64 {
    let di = delta_i_deg.to_radians();
    (va * va + vb * vb - 2.0 * va * vb * di.cos()).sqrt()
}
