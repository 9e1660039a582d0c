use std::f64::consts::PI;

use proptest::prelude::*;

use crate::{
    Config, Crankshaft, Cylinder, EPSILON, Mechanism, Point, Vec2, advance, piston_position,
    tests::assert_nearly_eq,
};

fn mechanism(
    crank_radius: f64,
    angle: f64,
    origin: (f64, f64),
    direction: (f64, f64),
    rod: f64,
) -> Mechanism {
    Mechanism {
        crankshaft: Crankshaft {
            crank_radius,
            angle,
        },
        cylinder: Cylinder {
            origin: Point::from(origin),
            direction: Vec2::new(direction.0, direction.1),
        },
        connecting_rod_length: rod,
    }
}

proptest! {
    /// Whenever the solver finds a position, the connecting rod fits it
    /// exactly: the piston is one rod length from the crankpin.
    #[test]
    fn piston_is_one_rod_length_from_the_crankpin(
        crank_radius in 1.0..100.0f64,
        angle in (-2.0 * PI)..(2.0 * PI),
        origin_x in -100.0..100.0f64,
        origin_y in -100.0..100.0f64,
        direction_x in -10.0..10.0f64,
        direction_y in -10.0..10.0f64,
        rod in 1.0..300.0f64,
    ) {
        // Zero-ish directions are rejected by design, not solved.
        prop_assume!(Vec2::new(direction_x, direction_y).magnitude() > EPSILON);

        let mechanism = mechanism(
            crank_radius,
            angle,
            (origin_x, origin_y),
            (direction_x, direction_y),
            rod,
        );
        if let Ok(piston) = piston_position(&mechanism) {
            let crankpin = mechanism.crankshaft.crankpin();
            assert_nearly_eq(piston.euclidean_distance(crankpin), rod);
        }
    }

    /// Whenever the solver finds a position, it lies on the line through
    /// the cylinder origin along the cylinder direction.
    #[test]
    fn piston_lies_on_the_cylinder_axis(
        crank_radius in 1.0..100.0f64,
        angle in (-2.0 * PI)..(2.0 * PI),
        origin_x in -100.0..100.0f64,
        origin_y in -100.0..100.0f64,
        direction_x in -10.0..10.0f64,
        direction_y in -10.0..10.0f64,
        rod in 1.0..300.0f64,
    ) {
        prop_assume!(Vec2::new(direction_x, direction_y).magnitude() > EPSILON);

        let mechanism = mechanism(
            crank_radius,
            angle,
            (origin_x, origin_y),
            (direction_x, direction_y),
            rod,
        );
        if let Ok(piston) = piston_position(&mechanism) {
            let along_axis = piston - mechanism.cylinder.origin;
            let axis = mechanism.cylinder.direction.normalized().unwrap();
            assert_nearly_eq(along_axis.cross_2d(&axis), 0.0);
        }
    }

    /// The solver is a pure function: the same snapshot twice gives
    /// bit-identical results, valid or not.
    #[test]
    fn solver_is_deterministic(
        crank_radius in 1.0..100.0f64,
        angle in (-2.0 * PI)..(2.0 * PI),
        origin_x in -100.0..100.0f64,
        origin_y in -100.0..100.0f64,
        direction_x in -10.0..10.0f64,
        direction_y in -10.0..10.0f64,
        rod in 1.0..300.0f64,
    ) {
        let mechanism = mechanism(
            crank_radius,
            angle,
            (origin_x, origin_y),
            (direction_x, direction_y),
            rod,
        );
        assert_eq!(piston_position(&mechanism), piston_position(&mechanism));
    }

    /// Turning the crank for one long frame or two short ones lands on
    /// the same angle, so the angular velocity doesn't depend on the
    /// frame rate.
    #[test]
    fn advance_is_frame_rate_independent(
        start_angle in (-2.0 * PI)..(2.0 * PI),
        elapsed in 0.001..0.1f64,
    ) {
        let config = Config::default();
        let mut mechanism = Mechanism::default();
        mechanism.crankshaft.angle = start_angle;

        let one_long_frame = advance(&mechanism, 2.0 * elapsed, &config);
        let two_short_frames = advance(&advance(&mechanism, elapsed, &config), elapsed, &config);
        assert_nearly_eq(
            one_long_frame.crankshaft.angle,
            two_short_frames.crankshaft.angle,
        );
    }
}
