use crate::sim::event::{scan, EventKind, RangeCrossingDetector};
use crate::sim::Trajectory;

/// Summary statistics computed from one flight.
#[derive(Debug, Clone)]
pub struct FlightSummary {
    pub apex_height: f64,
    pub apex_time: f64,
    pub landing_range: f64,
    pub flight_time: f64,
    pub impact_speed: f64,
    pub max_speed: f64,
    /// Flight was cut off by the simulated-time ceiling, still airborne.
    pub capped: bool,
}

impl FlightSummary {
    /// Compute summary from trajectory data.
    pub fn from_trajectory(traj: &Trajectory) -> Self {
        let apex_state = traj
            .states
            .iter()
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .expect("trajectory holds >= 1 sample");

        let max_speed = traj
            .states
            .iter()
            .map(|s| s.speed())
            .fold(0.0_f64, f64::max);

        let last = traj.last();

        FlightSummary {
            apex_height: apex_state.pos.y,
            apex_time: apex_state.time,
            landing_range: last.pos.x,
            flight_time: last.time,
            impact_speed: last.speed(),
            max_speed,
            capped: traj.capped,
        }
    }
}

/// Height margin over the net tape where the flight crosses the net line,
/// or `None` when the flight never reaches it. Negative means the shuttle
/// passed below tape height.
pub fn net_clearance(traj: &Trajectory, net_distance: f64, net_height: f64) -> Option<f64> {
    let mut det = RangeCrossingDetector::new(net_distance);
    match scan(&traj.states, &mut det) {
        Some(EventKind::RangeCrossing { height, .. }) => Some(height - net_height),
        _ => None,
    }
}
