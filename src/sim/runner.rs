use crate::dynamics::{SimConfig, State};
use crate::errors::SimError;
use crate::shuttle::{LaunchCondition, Shuttle};

use super::integrator::euler_step;

// ---------------------------------------------------------------------------
// Trajectory
// ---------------------------------------------------------------------------

/// One simulated flight: time-ordered state samples from launch to ground
/// contact (or the simulated-time ceiling).
///
/// Created fresh by every [`simulate`] call and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Trajectory {
    pub states: Vec<State>,
    /// True when the run hit the sample ceiling while still airborne.
    pub capped: bool,
}

impl Trajectory {
    /// Final sample of the flight.
    pub fn last(&self) -> &State {
        self.states.last().expect("trajectory holds >= 1 sample")
    }

    /// True when the flight ended at or below the ground plane.
    pub fn landed(&self) -> bool {
        !self.capped
    }

    /// Horizontal distance of the final sample, m.
    pub fn landing_range(&self) -> f64 {
        self.last().pos.x
    }

    /// Simulated flight duration, s.
    pub fn flight_time(&self) -> f64 {
        self.last().time
    }
}

// ---------------------------------------------------------------------------
// Full flight simulation
// ---------------------------------------------------------------------------

/// Simulate one stroke from launch to ground contact (or time ceiling).
///
/// The first sample is exactly the supplied initial position; production
/// stops at the first *stepped* sample whose height is <= 0, which is kept
/// as the final element. The initial sample never terminates the run, so a
/// ground-level launch still flies.
pub fn simulate(
    shuttle: &Shuttle,
    launch: &LaunchCondition,
    config: &SimConfig,
) -> Result<Trajectory, SimError> {
    launch.validate()?;

    let mut state = State {
        time: 0.0,
        pos: launch.initial_position(),
        vel: launch.initial_velocity(),
    };

    let max_samples = config.max_samples();
    let mut states = Vec::with_capacity(max_samples.min(100_000));
    states.push(state.clone());

    let mut landed = false;

    while states.len() < max_samples {
        state = euler_step(&state, shuttle, config.dt);

        // Ground contact: keep the terminating sample and stop
        if state.pos.y <= 0.0 {
            states.push(state);
            landed = true;
            break;
        }

        states.push(state.clone());
    }

    Ok(Trajectory {
        states,
        capped: !landed,
    })
}

/// Run a list of scenarios against one shuttle, index-aligned with the
/// input. A scenario that fails validation yields its own `Err` entry and
/// never aborts its siblings.
pub fn run_batch(
    shuttle: &Shuttle,
    scenarios: &[LaunchCondition],
    config: &SimConfig,
) -> Vec<Result<Trajectory, SimError>> {
    scenarios
        .iter()
        .map(|launch| simulate(shuttle, launch, config))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
