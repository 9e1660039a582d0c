//! Closed-form solver for the piston position.

use libm::{cos, sin, sqrt};

use crate::{Mechanism, Point, SolveError, is_zero};

fn square(a: f64) -> f64 {
    a * a
}

/// Where the piston sits on the cylinder axis.
///
/// The piston lies at `origin + t * direction` for the scalar `t` that
/// puts it exactly one rod length away from the crankpin. Substituting
/// that distance constraint gives a quadratic in `t`; see README.md for
/// the derivation.
///
/// The quadratic has two solutions, matching the two possible piston
/// positions (up and down for a vertical cylinder, left and right for a
/// horizontal one). This always picks the one further along the positive
/// direction of the cylinder axis.
///
/// Deterministic and side-effect free: the same snapshot always produces
/// the same result.
pub fn piston_position(mechanism: &Mechanism) -> Result<Point, SolveError> {
    // The direction can be defined as basically any vector of any size,
    // so it must be normalized before the math below. Normalizing a zero
    // vector is undefined, so that case is rejected up front, before it
    // can turn into NaN.
    let direction = mechanism
        .cylinder
        .direction
        .normalized()
        .ok_or(SolveError::DegenerateDirection)?;

    let dx = direction.x;
    let dy = direction.y;
    let lx = mechanism.cylinder.origin.x;
    let ly = mechanism.cylinder.origin.y;
    let r = mechanism.crankshaft.crank_radius;
    let rod = mechanism.connecting_rod_length;
    let alpha = mechanism.crankshaft.angle;

    let a = square(dx) + square(dy);
    let b = 2.0 * (lx * dx + ly * dy - r * dx * cos(alpha) - r * dy * sin(alpha));
    let c = square(lx) + square(ly)
        - 2.0 * r * lx * cos(alpha)
        - 2.0 * r * ly * sin(alpha)
        - square(rod)
        + square(r);

    // No real solutions means the connecting rod doesn't reach the
    // cylinder axis. A discriminant of exactly zero is the tangency
    // case: one solution, still valid.
    let discriminant = square(b) - 4.0 * a * c;
    let divisor = 2.0 * a;

    if is_zero(divisor) {
        return Err(SolveError::DegenerateDirection);
    }
    if discriminant < 0.0 {
        return Err(SolveError::RodTooShort);
    }
    let t = (-b + sqrt(discriminant)) / divisor;

    Ok(mechanism.cylinder.origin + direction * t)
}
