use crate::shuttle::LaunchCondition;

// ---------------------------------------------------------------------------
// Court geometry
// ---------------------------------------------------------------------------

/// Net tape height at the posts, m.
pub const NET_HEIGHT: f64 = 1.55;

/// Landmark distances along a doubles court, measured from the near
/// baseline. Handed to whichever renderer consumes the trajectories; the
/// physics never looks at these.
#[derive(Debug, Clone)]
pub struct CourtMarks {
    pub near_baseline: f64,
    pub near_doubles_service: f64,
    pub near_short_service: f64,
    pub net: f64,
    pub far_short_service: f64,
    pub far_doubles_service: f64,
    pub far_baseline: f64,
}

impl Default for CourtMarks {
    fn default() -> Self {
        Self {
            near_baseline: 0.0,
            near_doubles_service: 0.76,
            near_short_service: 4.67,
            net: 6.705,
            far_short_service: 8.685,
            far_doubles_service: 12.65,
            far_baseline: 13.41,
        }
    }
}

impl CourtMarks {
    /// All marks in downrange order, for tick rendering.
    pub fn ticks(&self) -> [f64; 7] {
        [
            self.near_baseline,
            self.near_doubles_service,
            self.near_short_service,
            self.net,
            self.far_short_service,
            self.far_doubles_service,
            self.far_baseline,
        ]
    }

    /// Classify a landing distance against the far court: SHORT of the far
    /// service line, IN the back box, or LONG past the baseline. Landings
    /// on the near side of the net are SHORT too.
    pub fn landing_verdict(&self, range: f64) -> &'static str {
        if range > self.far_baseline {
            "LONG"
        } else if range >= self.far_short_service {
            "IN"
        } else {
            "SHORT"
        }
    }
}

// ---------------------------------------------------------------------------
// Preset scenario lists
// ---------------------------------------------------------------------------

pub mod presets {
    use super::*;

    /// The seven-stroke clear comparison: one full-court reference clear
    /// from the baseline, then six lifts from the short service line at
    /// increasing angle and speed.
    pub fn clear_comparison() -> Vec<LaunchCondition> {
        vec![
            LaunchCondition::new(200.0, 45.0),
            LaunchCondition::new(100.0, 55.0).at(4.67),
            LaunchCondition::new(117.0, 60.0).at(4.67),
            LaunchCondition::new(147.0, 60.0).at(4.67),
            LaunchCondition::new(170.0, 65.0).at(4.67),
            LaunchCondition::new(200.0, 65.0).at(4.67),
            LaunchCondition::new(220.0, 65.0).at(4.67),
        ]
    }

    /// Title for the comparison figure.
    pub const CLEAR_COMPARISON_TITLE: &str = "Badminton Clears Comparison";
}
