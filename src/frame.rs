//! The per-frame update step, kept free of any rendering dependency.
//!
//! A frame is: apply guide drags, turn the crank, solve. The renderer
//! consumes the resulting [`Tick`] and draws it; nothing in here knows
//! about pixels.

use crate::{
    DragOutcome, DragState, Mechanism, Point, Pointer, SolveError, interaction, solver,
};

/// Tunables for the frame loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// How far the crank turns per reference frame, in radians.
    pub crank_speed: f64,
    /// The reference frame duration that elapsed wall-clock time is
    /// normalized against, in seconds.
    pub reference_frame_seconds: f64,
    /// Hit-test radius of the guide handles, in world units.
    pub guide_radius: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            crank_speed: 0.05,
            reference_frame_seconds: 0.016,
            guide_radius: 20.0,
        }
    }
}

/// Turn the crank by one frame's worth of rotation.
///
/// Elapsed time is normalized against the reference frame duration, so
/// the crank's angular velocity is independent of the actual frame rate.
pub fn advance(mechanism: &Mechanism, elapsed_seconds: f64, config: &Config) -> Mechanism {
    let delta = elapsed_seconds / config.reference_frame_seconds;
    let mut next = *mechanism;
    next.crankshaft.angle += config.crank_speed * delta;
    next
}

/// Solved positions for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSolution {
    /// Where the crankpin orbits. Always defined.
    pub crankpin: Point,
    /// Where the piston sits, if the current geometry allows one.
    pub piston: Result<Point, SolveError>,
}

impl FrameSolution {
    /// Solve one snapshot of the mechanism.
    pub fn solve(mechanism: &Mechanism) -> Self {
        Self {
            crankpin: mechanism.crankshaft.crankpin(),
            piston: solver::piston_position(mechanism),
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// The mechanism for the next frame.
    pub mechanism: Mechanism,
    /// The guide drag state for the next frame.
    pub drag: DragState,
    /// Solved positions to draw this frame.
    pub solution: FrameSolution,
}

/// One full update pass: apply guide drags, turn the crank, solve.
pub fn tick(
    mechanism: Mechanism,
    pointer: Pointer,
    drag_state: DragState,
    elapsed_seconds: f64,
    config: &Config,
) -> Tick {
    let DragOutcome { state, cylinder } =
        interaction::drag(drag_state, pointer, mechanism.cylinder, config.guide_radius);
    let mechanism = advance(
        &Mechanism {
            cylinder,
            ..mechanism
        },
        elapsed_seconds,
        config,
    );
    Tick {
        mechanism,
        drag: state,
        solution: FrameSolution::solve(&mechanism),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::assert_nearly_eq;

    #[test]
    fn default_config_matches_the_frame_loop_constants() {
        let config = Config::default();
        assert_nearly_eq(config.crank_speed, 0.05);
        assert_nearly_eq(config.reference_frame_seconds, 0.016);
        assert_nearly_eq(config.guide_radius, 20.0);
    }

    #[test]
    fn advance_turns_the_crank_by_one_step_per_reference_frame() {
        let config = Config::default();
        let mechanism = Mechanism::default();
        let next = advance(&mechanism, config.reference_frame_seconds, &config);
        assert_nearly_eq(next.crankshaft.angle, 0.05);
        // The input snapshot is untouched.
        assert_nearly_eq(mechanism.crankshaft.angle, 0.0);
    }

    #[test]
    fn advance_scales_with_elapsed_time() {
        let config = Config::default();
        let mechanism = Mechanism::default();
        // Half a reference frame elapsed means half a step.
        let next = advance(&mechanism, config.reference_frame_seconds / 2.0, &config);
        assert_nearly_eq(next.crankshaft.angle, 0.025);
    }

    #[test]
    fn tick_applies_drags_before_solving() {
        let config = Config::default();
        let mechanism = Mechanism::default();
        // Grab the origin handle and drag it sideways.
        let pointer = Pointer {
            position: Point { x: 5.0, y: 0.0 },
            pressed: true,
        };
        let tick = tick(mechanism, pointer, DragState::Idle, 0.0, &config);
        assert_eq!(tick.drag, DragState::Origin);
        assert_eq!(tick.mechanism.cylinder.origin, Point { x: 5.0, y: 0.0 });
        // The solution reflects the moved cylinder: the piston sits on
        // the axis through the dragged origin.
        let piston = tick.solution.piston.unwrap();
        assert_nearly_eq(piston.x, 5.0);
    }

    #[test]
    fn tick_without_input_just_runs_the_mechanism() {
        let config = Config::default();
        let pointer = Pointer {
            position: Point { x: 0.0, y: 0.0 },
            pressed: false,
        };
        let tick = tick(
            Mechanism::default(),
            pointer,
            DragState::Idle,
            config.reference_frame_seconds,
            &config,
        );
        assert_eq!(tick.drag, DragState::Idle);
        assert_nearly_eq(tick.mechanism.crankshaft.angle, 0.05);
        tick.solution.piston.unwrap();
    }
}
