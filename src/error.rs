/// Why no piston position exists for a given mechanism snapshot.
///
/// Neither case is fatal: both resolve themselves as the crank angle or
/// the cylinder geometry changes on later frames. Callers are expected
/// to skip drawing the rod and piston and carry on.
#[derive(thiserror::Error, Clone, Copy, Debug, Eq, PartialEq)]
pub enum SolveError {
    /// The cylinder direction is zero or near zero, so the cylinder
    /// axis is undefined.
    #[error("cylinder direction is zero or near zero, so the cylinder axis is undefined")]
    DegenerateDirection,
    /// The connecting rod cannot bridge the crankpin and the cylinder
    /// axis at this crank angle.
    #[error("connecting rod is too short to reach the cylinder axis at this crank angle")]
    RodTooShort,
}
