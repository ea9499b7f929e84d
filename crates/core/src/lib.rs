//! Core units, constants, and shared primitives for the maneuver calculator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Gravitational parameter of Earth (m³/s²).
    pub const MU_EARTH_M3_S2: f64 = 3.986_004_418e14;
    /// Mean equatorial radius of Earth (m).
    pub const EARTH_RADIUS_M: f64 = 6.378_1e6;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_DAY;

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }
}

/// The shared rounding rule for user-facing scalars.
pub mod rounding {
    /// Round to two decimal places, half away from zero.
    ///
    /// Speeds, delta-v values, and transfer times all carry exactly two
    /// decimals; keeping the rule in one place lets results compose without
    /// re-rounding surprises.
    #[inline]
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}
