//! The mechanism snapshot: dimensions and pose of each moving part.

use libm::{cos, sin};

use crate::{Point, Vec2};

/// The rotating shaft. Its center is fixed at the world origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crankshaft {
    /// Distance between the center of the crankshaft and the crankpin.
    pub crank_radius: f64,
    /// Current rotation in radians. Unconstrained; wraps naturally
    /// through the trig functions.
    pub angle: f64,
}

impl Crankshaft {
    /// Where the crankpin currently orbits.
    /// Defined for every angle and radius.
    pub fn crankpin(&self) -> Point {
        Point {
            x: cos(self.angle) * self.crank_radius,
            y: sin(self.angle) * self.crank_radius,
        }
    }
}

impl Default for Crankshaft {
    fn default() -> Self {
        Self {
            crank_radius: 50.0,
            angle: 0.0,
        }
    }
}

/// Position and orientation of the cylinder, described as a 2D ray.
/// The piston moves along this ray in the positive direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    /// World-space anchor of the cylinder axis.
    pub origin: Point,
    /// Direction of the axis. Must not be the zero vector.
    /// Only the direction matters to the solver; the magnitude places
    /// the direction guide handle.
    pub direction: Vec2,
}

impl Cylinder {
    /// Where the direction guide handle sits.
    pub fn direction_handle(&self) -> Point {
        self.origin + self.direction
    }
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            origin: Point { x: 0.0, y: 0.0 },
            direction: Vec2::new(0.0, 20.0),
        }
    }
}

/// Everything the solver reads: one snapshot of the whole mechanism.
///
/// Crank radius and rod length should be positive for physically
/// meaningful results, though the solver does not enforce this.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mechanism {
    /// The rotating crankshaft.
    pub crankshaft: Crankshaft,
    /// The cylinder the piston travels in.
    pub cylinder: Cylinder,
    /// Distance between the crankpin and the piston pin.
    pub connecting_rod_length: f64,
}

impl Default for Mechanism {
    fn default() -> Self {
        Self {
            crankshaft: Crankshaft::default(),
            cylinder: Cylinder::default(),
            connecting_rod_length: 70.0,
        }
    }
}
