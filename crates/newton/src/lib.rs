//! Missing-variable solver for Newton's second law, F = m·a.
//!
//! The caller supplies exactly two of the three quantities and receives the
//! third. Keeping this a pure function (rather than form-submission control
//! flow) gives front-ends a single contract: wrong blank counts, unparsable
//! fields, and non-physical values all surface as explicit errors.

use maneuver_core::rounding::round2;
use thiserror::Error;

/// The three quantities related by F = m·a.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    Force,
    Mass,
    Acceleration,
}

impl Variable {
    /// Lower-case English name, as printed in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Variable::Force => "force",
            Variable::Mass => "mass",
            Variable::Acceleration => "acceleration",
        }
    }

    /// SI unit symbol for the quantity.
    pub fn unit(&self) -> &'static str {
        match self {
            Variable::Force => "N",
            Variable::Mass => "kg",
            Variable::Acceleration => "m/s^2",
        }
    }
}

/// A solved quantity, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    pub variable: Variable,
    pub value: f64,
}

/// Reasons a solve can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NewtonError {
    #[error("field `{field}` is not a number: `{value}`")]
    InvalidInput { field: &'static str, value: String },

    #[error("exactly two of the three quantities must be provided, got {provided}")]
    MissingFieldCount { provided: usize },

    #[error("{0} must be finite and non-negative")]
    NonPhysical(&'static str),

    #[error("cannot solve: {0} is zero")]
    DivisionByZero(&'static str),
}

/// Solve F = m·a for whichever argument is `None`.
///
/// Exactly one argument must be `None`. Provided values must be finite;
/// mass and acceleration must additionally be non-negative. Solving for
/// mass requires a non-zero acceleration, and solving for acceleration a
/// non-zero mass.
pub fn solve_missing(
    force: Option<f64>,
    mass: Option<f64>,
    accel: Option<f64>,
) -> Result<Solution, NewtonError> {
    for (name, value) in [("force", force), ("mass", mass), ("acceleration", accel)] {
        if let Some(v) = value {
            if !v.is_finite() {
                return Err(NewtonError::NonPhysical(name));
            }
        }
    }
    if matches!(mass, Some(m) if m < 0.0) {
        return Err(NewtonError::NonPhysical("mass"));
    }
    if matches!(accel, Some(a) if a < 0.0) {
        return Err(NewtonError::NonPhysical("acceleration"));
    }

    let (variable, value) = match (force, mass, accel) {
        (None, Some(m), Some(a)) => (Variable::Force, m * a),
        (Some(f), None, Some(a)) => {
            if a == 0.0 {
                return Err(NewtonError::DivisionByZero("acceleration"));
            }
            (Variable::Mass, f / a)
        }
        (Some(f), Some(m), None) => {
            if m == 0.0 {
                return Err(NewtonError::DivisionByZero("mass"));
            }
            (Variable::Acceleration, f / m)
        }
        _ => {
            let provided = [force, mass, accel].iter().filter(|v| v.is_some()).count();
            return Err(NewtonError::MissingFieldCount { provided });
        }
    };

    Ok(Solution {
        variable,
        value: round2(value),
    })
}

/// Solve from three form-style text fields, where a blank (or whitespace)
/// field marks the missing quantity. Parse failures are reported per field
/// rather than aborting the whole submission.
pub fn solve_fields(force: &str, mass: &str, accel: &str) -> Result<Solution, NewtonError> {
    solve_missing(
        parse_field("force", force)?,
        parse_field("mass", mass)?,
        parse_field("acceleration", accel)?,
    )
}

fn parse_field(field: &'static str, raw: &str) -> Result<Option<f64>, NewtonError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| NewtonError::InvalidInput {
            field,
            value: trimmed.to_string(),
        })
}
