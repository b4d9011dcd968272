use crate::dynamics::State;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Highest point of the arc: vertical velocity changed sign.
    Apex,
    /// Horizontal position crossed a court distance, at the given height.
    RangeCrossing { distance: f64, height: f64 },
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Detects the apex (vertical velocity going from positive to non-positive).
pub struct ApexDetector {
    fired: bool,
}

impl ApexDetector {
    pub fn new() -> Self {
        Self { fired: false }
    }
}

impl Default for ApexDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl EventDetector for ApexDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if !self.fired && prev.vel.y > 0.0 && current.vel.y <= 0.0 {
            self.fired = true;
            Some(EventKind::Apex)
        } else {
            None
        }
    }
}

/// Detects when horizontal position crosses a fixed court distance,
/// reporting the height at the crossing by linear interpolation between
/// the straddling samples. Fires once.
pub struct RangeCrossingDetector {
    pub distance: f64,
    fired: bool,
}

impl RangeCrossingDetector {
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            fired: false,
        }
    }
}

impl EventDetector for RangeCrossingDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let crossed = prev.pos.x < self.distance && current.pos.x >= self.distance;
        if !crossed {
            return None;
        }
        self.fired = true;
        let dx = current.pos.x - prev.pos.x;
        let height = if dx.abs() > 1e-12 {
            let t = (self.distance - prev.pos.x) / dx;
            prev.pos.y + t * (current.pos.y - prev.pos.y)
        } else {
            current.pos.y
        };
        Some(EventKind::RangeCrossing {
            distance: self.distance,
            height,
        })
    }
}

/// Run a detector over a whole sample sequence, returning its first event.
pub fn scan(states: &[State], detector: &mut dyn EventDetector) -> Option<EventKind> {
    states
        .windows(2)
        .find_map(|pair| detector.check(&pair[0], &pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    fn make_state(x: f64, y: f64, vx: f64, vy: f64) -> State {
        State {
            time: 0.0,
            pos: Vector2::new(x, y),
            vel: Vector2::new(vx, vy),
        }
    }

    #[test]
    fn apex_detected_once() {
        let mut det = ApexDetector::new();
        let up = make_state(3.0, 4.0, 10.0, 2.0);
        let over = make_state(3.1, 4.02, 10.0, -0.1);
        assert_eq!(det.check(&up, &over), Some(EventKind::Apex));
        assert_eq!(det.check(&up, &over), None);
    }

    #[test]
    fn no_apex_while_climbing() {
        let mut det = ApexDetector::new();
        let a = make_state(1.0, 2.0, 10.0, 8.0);
        let b = make_state(1.1, 2.08, 10.0, 7.9);
        assert_eq!(det.check(&a, &b), None);
    }

    #[test]
    fn range_crossing_interpolates_height() {
        let mut det = RangeCrossingDetector::new(6.705);
        let before = make_state(6.5, 3.0, 20.0, -1.0);
        let after = make_state(6.9, 2.6, 20.0, -1.2);
        match det.check(&before, &after) {
            Some(EventKind::RangeCrossing { distance, height }) => {
                assert_eq!(distance, 6.705);
                // 51.25% of the way from 3.0 to 2.6
                assert!((height - 2.795).abs() < 1e-9);
            }
            other => panic!("expected a crossing, got {other:?}"),
        }
        // One-shot
        assert_eq!(det.check(&before, &after), None);
    }

    #[test]
    fn scan_finds_crossing_in_sequence() {
        let states = vec![
            make_state(0.0, 0.6, 30.0, 10.0),
            make_state(3.0, 1.5, 30.0, 8.0),
            make_state(6.0, 2.2, 30.0, 6.0),
            make_state(9.0, 2.6, 30.0, 4.0),
        ];
        let mut det = RangeCrossingDetector::new(6.705);
        let ev = scan(&states, &mut det);
        assert!(matches!(ev, Some(EventKind::RangeCrossing { .. })));
    }
}
