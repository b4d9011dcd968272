use crate::dynamics::{self, State};
use crate::shuttle::Shuttle;

// ---------------------------------------------------------------------------
// Explicit (forward) Euler integrator
// ---------------------------------------------------------------------------

/// Single forward-Euler step: advance state by dt.
///
/// Both velocity and position step from their values at the start of the
/// step; in particular the position increment uses the pre-update velocity.
/// A midpoint or RK scheme would be more accurate per step, but this
/// ordering is what the shuttle flight model is calibrated against.
pub fn euler_step(state: &State, shuttle: &Shuttle, dt: f64) -> State {
    let d = dynamics::derivatives(state, shuttle);
    state.apply(&d, dt)
}
