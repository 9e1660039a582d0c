//! Interactive 2D slider-crank mechanism.
//! Solves where the piston of a crankshaft/connecting-rod linkage
//! sits along its cylinder axis, one frame at a time.

pub use crate::datatypes::inputs::{Crankshaft, Cylinder, Mechanism};
pub use crate::datatypes::outputs::Point;
pub use crate::error::SolveError;
pub use crate::frame::{Config, FrameSolution, Tick, advance, tick};
pub use crate::interaction::{DragOutcome, DragState, Pointer, drag};
pub use crate::solver::piston_position;
pub use crate::vector::Vec2;
pub use crate::view::View;

/// Mechanism data (crankshaft, cylinder, solved positions).
pub mod datatypes;
/// What can go wrong when solving.
mod error;
/// Per-frame configuration and the pure update/solve step.
mod frame;
/// Drag state machine for the cylinder guide handles.
mod interaction;
/// Closed-form piston-position solver.
mod solver;
/// 2D vector math.
mod vector;
/// Camera transform between world and screen coordinates.
mod view;

pub(crate) const EPSILON: f64 = 1e-3;

pub(crate) fn is_zero(a: f64) -> bool {
    a.abs() < EPSILON
}
