use nalgebra::Vector2;

use crate::physics::aerodynamics;
use crate::shuttle::Shuttle;

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Full state at a single point in simulated time.
/// Frame: x downrange along the court, y up, origin at the near baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub time: f64,         // s
    pub pos: Vector2<f64>, // m   [downrange, height]
    pub vel: Vector2<f64>, // m/s
}

impl State {
    /// Advance state by a derivative scaled by dt (explicit Euler increment).
    ///
    /// The position increment uses the derivative's `dpos`, i.e. the velocity
    /// at the *start* of the step. That ordering is part of the scheme, not
    /// an accident: velocity and position both step from step-start values.
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
        }
    }

    /// Speed magnitude, m/s.
    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }
}

// ---------------------------------------------------------------------------
// State derivative (dp/dt, dv/dt)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Deriv {
    pub dpos: Vector2<f64>, // velocity
    pub dvel: Vector2<f64>, // acceleration
}

/// Compute state derivatives for a given state and projectile.
///
/// Forces modeled:
///   1. Gravity — uniform, straight down
///   2. Drag    — magnitude k * v^n, opposing velocity
pub fn derivatives(state: &State, shuttle: &Shuttle) -> Deriv {
    let a_gravity = Vector2::new(0.0, -shuttle.gravity);
    let a_drag = aerodynamics::drag_accel(&state.vel, shuttle);

    Deriv {
        dpos: state.vel,
        dvel: a_gravity + a_drag,
    }
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,       // integration timestep, s
    pub max_time: f64, // simulated-time ceiling, s
}

impl SimConfig {
    /// Maximum number of samples a trajectory may hold, counting the
    /// initial sample.
    pub fn max_samples(&self) -> usize {
        // Round: 5.0 / 0.01 is 499.999… in binary floating point
        (self.max_time / self.dt).round() as usize
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,      // 100 Hz
            max_time: 5.0, // rally strokes land well within 5 s
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gravity_only_at_rest() {
        let s = Shuttle::standard();
        let state = State {
            time: 0.0,
            pos: Vector2::new(0.0, 0.6),
            vel: Vector2::zeros(),
        };
        let d = derivatives(&state, &s);
        assert_relative_eq!(d.dvel.x, 0.0);
        assert_relative_eq!(d.dvel.y, -s.gravity);
    }

    #[test]
    fn drag_decelerates_both_axes_on_ascent() {
        let s = Shuttle::standard();
        let state = State {
            time: 0.0,
            pos: Vector2::new(0.0, 0.6),
            vel: Vector2::new(30.0, 30.0),
        };
        let d = derivatives(&state, &s);
        assert!(d.dvel.x < 0.0, "drag must slow horizontal motion");
        assert!(d.dvel.y < -s.gravity, "drag adds to gravity on the way up");
    }

    #[test]
    fn derivative_dpos_is_step_start_velocity() {
        let s = Shuttle::standard();
        let state = State {
            time: 0.0,
            pos: Vector2::new(1.0, 2.0),
            vel: Vector2::new(10.0, -3.0),
        };
        let d = derivatives(&state, &s);
        assert_eq!(d.dpos, state.vel);
    }

    #[test]
    fn apply_steps_from_start_values() {
        let state = State {
            time: 1.0,
            pos: Vector2::new(5.0, 2.0),
            vel: Vector2::new(10.0, 0.0),
        };
        let d = Deriv {
            dpos: state.vel,
            dvel: Vector2::new(0.0, -9.81),
        };
        let next = state.apply(&d, 0.01);
        assert_relative_eq!(next.time, 1.01, max_relative = 1e-12);
        // Position moved by the old velocity, unaffected by the new one
        assert_relative_eq!(next.pos.x, 5.1, max_relative = 1e-12);
        assert_relative_eq!(next.pos.y, 2.0);
        assert_relative_eq!(next.vel.y, -0.0981, max_relative = 1e-12);
    }

    #[test]
    fn default_config_gives_500_samples() {
        assert_eq!(SimConfig::default().max_samples(), 500);
    }
}
