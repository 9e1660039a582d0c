//! A basic example: sweep the crank through one revolution and print
//! where the crankpin and piston end up at each step.
use slider_crank::{Mechanism, piston_position};

fn main() {
    // Start from the default geometry, but shorten the rod so that it
    // can't reach the cylinder axis at every angle.
    let mut mechanism = Mechanism::default();
    mechanism.connecting_rod_length = 40.0;

    for degrees in (0..360).step_by(15) {
        mechanism.crankshaft.angle = f64::from(degrees).to_radians();
        let crankpin = mechanism.crankshaft.crankpin();
        match piston_position(&mechanism) {
            Ok(piston) => println!("{degrees:>3} deg  crankpin {crankpin}  piston {piston}"),
            Err(e) => println!("{degrees:>3} deg  crankpin {crankpin}  {e}"),
        }
    }
}
