//! Dragging the cylinder guide handles.
//!
//! While a drag is in progress it owns the pointer: the other handle
//! ignores mouse input until the button is released, so the cursor can
//! pass over it without stealing the drag.

use crate::{Cylinder, Point};

/// Which guide handle currently owns the pointer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// The cylinder origin handle follows the pointer.
    Origin,
    /// The cylinder direction handle follows the pointer.
    Direction,
}

/// Pointer input for one frame, already converted to world coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Pointer position in world space.
    pub position: Point,
    /// Whether the primary button is currently held down.
    pub pressed: bool,
}

/// One frame of guide interaction: the state for the next frame, and
/// the cylinder, moved if a handle was dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOutcome {
    /// The drag state for the next frame.
    pub state: DragState,
    /// The cylinder after any drag was applied.
    pub cylinder: Cylinder,
}

/// Advance the guide drag state machine by one frame.
///
/// A drag starts only from [`DragState::Idle`], when the button is
/// pressed while the pointer hovers a handle; the origin handle wins if
/// both handles are hovered. Releasing the button always returns to
/// `Idle`.
pub fn drag(
    state: DragState,
    pointer: Pointer,
    cylinder: Cylinder,
    handle_radius: f64,
) -> DragOutcome {
    if !pointer.pressed {
        return DragOutcome {
            state: DragState::Idle,
            cylinder,
        };
    }

    let state = match state {
        DragState::Idle => {
            let over_origin = pointer.position.euclidean_distance(cylinder.origin) < handle_radius;
            let over_direction = pointer
                .position
                .euclidean_distance(cylinder.direction_handle())
                < handle_radius;
            if over_origin {
                DragState::Origin
            } else if over_direction {
                DragState::Direction
            } else {
                DragState::Idle
            }
        }
        held => held,
    };

    let cylinder = match state {
        DragState::Idle => cylinder,
        DragState::Origin => Cylinder {
            origin: pointer.position,
            ..cylinder
        },
        DragState::Direction => Cylinder {
            direction: pointer.position - cylinder.origin,
            ..cylinder
        },
    };

    DragOutcome { state, cylinder }
}
