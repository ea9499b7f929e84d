use thiserror::Error;

/// A violated physical precondition. Computations fail with one of these
/// rather than returning NaN or a partially filled result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("gravitational parameter must be positive, got {0} m^3/s^2")]
    NonPositiveMu(f64),

    #[error(
        "non-physical orbit: vis-viva radicand is negative at r = {radius_m} m, a = {semi_major_axis_m} m"
    )]
    NonPhysicalOrbit {
        radius_m: f64,
        semi_major_axis_m: f64,
    },

    #[error("unsupported transfer geometry: {0}")]
    UnsupportedGeometry(&'static str),
}
