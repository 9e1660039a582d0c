//! Camera transform between world and screen coordinates.
//!
//! World coordinates are what the mechanism is defined in (millimeters,
//! Y up). Screen coordinates are pixels (Y down). The transform is a
//! uniform scale, a Y flip, and a translation.

use crate::{Point, Vec2};

/// World/screen transform for one frame.
///
/// A value type: [`View::panned`] and [`View::zoomed`] return a new
/// view, nothing is mutated in place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    /// Pixels per world unit. Always positive.
    scale: f64,
    /// Screen position of the world origin.
    offset: Vec2,
}

impl View {
    /// A view at unit scale with the world origin at the center of a
    /// viewport of the given pixel size.
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::new(viewport_width / 2.0, viewport_height / 2.0),
        }
    }

    /// From world coordinates to screen coordinates.
    pub fn to_screen(&self, p: Point) -> Point {
        Point {
            x: self.offset.x + self.scale * p.x,
            y: self.offset.y - self.scale * p.y,
        }
    }

    /// From screen coordinates to world coordinates.
    pub fn to_world(&self, p: Point) -> Point {
        Point {
            x: (p.x - self.offset.x) / self.scale,
            y: (self.offset.y - p.y) / self.scale,
        }
    }

    /// From world size to screen size.
    pub fn to_screen_length(&self, value: f64) -> f64 {
        self.scale * value
    }

    /// From screen size to world size.
    pub fn to_world_length(&self, value: f64) -> f64 {
        value / self.scale
    }

    /// The view translated by a world-space vector.
    pub fn panned(&self, delta: Vec2) -> Self {
        Self {
            scale: self.scale,
            offset: Vec2::new(
                self.offset.x + self.scale * delta.x,
                self.offset.y - self.scale * delta.y,
            ),
        }
    }

    /// The view with its zoom multiplied by `factor`.
    pub fn zoomed(&self, factor: f64) -> Self {
        Self {
            scale: self.scale * factor,
            offset: self.offset,
        }
    }
}
