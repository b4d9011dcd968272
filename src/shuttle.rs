use nalgebra::Vector2;

use crate::errors::SimError;

// ---------------------------------------------------------------------------
// Shuttlecock physical parameters
// ---------------------------------------------------------------------------

/// Physical parameter set for one projectile.
///
/// Fixed for the duration of a run; the standard shuttlecock is available
/// via [`Shuttle::standard`], but nothing in the dynamics assumes it.
#[derive(Debug, Clone)]
pub struct Shuttle {
    pub name: String,
    pub mass: f64,          // kg
    pub cd: f64,            // drag coefficient (dimensionless)
    pub area: f64,          // cross-sectional area, m^2
    pub air_density: f64,   // kg/m^3
    pub gravity: f64,       // m/s^2
    pub drag_exponent: f64, // drag force ∝ speed^n (2 = quadratic)
}

impl Shuttle {
    /// Feather shuttlecock with sea-level air.
    pub fn standard() -> Self {
        Self {
            name: "Feather shuttle".into(),
            mass: 0.005,
            cd: 0.5,
            area: 0.003,
            air_density: 1.225,
            gravity: 9.81,
            drag_exponent: 2.0,
        }
    }

    /// Drag constant k = 0.5 * Cd * rho * A, so F_drag = k * v^n.
    pub fn drag_constant(&self) -> f64 {
        0.5 * self.cd * self.air_density * self.area
    }

    /// Terminal speed in free fall: drag balances weight, v_t = (m*g/k)^(1/n).
    pub fn terminal_speed(&self) -> f64 {
        (self.mass * self.gravity / self.drag_constant()).powf(1.0 / self.drag_exponent)
    }
}

// ---------------------------------------------------------------------------
// Launch condition
// ---------------------------------------------------------------------------

/// Initial conditions for one simulated stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchCondition {
    pub speed_kmh: f64, // racket-exit speed, km/h
    pub angle_deg: f64, // above horizontal
    pub height: f64,    // contact point height, m
    pub offset: f64,    // horizontal position of contact point, m
}

impl LaunchCondition {
    /// Launch from the reference contact height (0.6 m) at the court origin.
    pub fn new(speed_kmh: f64, angle_deg: f64) -> Self {
        Self {
            speed_kmh,
            angle_deg,
            height: 0.6,
            offset: 0.0,
        }
    }

    pub fn at(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn from_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Launch speed in m/s.
    pub fn speed_ms(&self) -> f64 {
        self.speed_kmh / 3.6
    }

    /// Initial position: (offset, height).
    pub fn initial_position(&self) -> Vector2<f64> {
        Vector2::new(self.offset, self.height)
    }

    /// Initial velocity decomposed along the launch angle.
    pub fn initial_velocity(&self) -> Vector2<f64> {
        let theta = self.angle_deg.to_radians();
        Vector2::new(
            self.speed_ms() * theta.cos(),
            self.speed_ms() * theta.sin(),
        )
    }

    /// Reject conditions the integrator cannot meaningfully handle.
    ///
    /// The launch angle is intentionally not range-checked: angles outside
    /// 0–90° integrate fine, they just describe strokes nobody plays.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.speed_kmh.is_finite()
            && self.angle_deg.is_finite()
            && self.height.is_finite()
            && self.offset.is_finite())
        {
            return Err(SimError::NonFiniteInput);
        }
        if self.speed_kmh <= 0.0 {
            return Err(SimError::NonPositiveSpeed {
                speed_kmh: self.speed_kmh,
            });
        }
        if self.height < 0.0 {
            return Err(SimError::NegativeLaunchHeight {
                height: self.height,
            });
        }
        Ok(())
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
    fn drag_constant_matches_definition() {
        let s = Shuttle::standard();
        assert_relative_eq!(s.drag_constant(), 0.5 * 0.5 * 1.225 * 0.003);
    }

    #[test]
    fn terminal_speed_balances_weight() {
        let s = Shuttle::standard();
        let vt = s.terminal_speed();
        let drag = s.drag_constant() * vt.powf(s.drag_exponent);
        assert_relative_eq!(drag, s.mass * s.gravity, max_relative = 1e-12);
        // Feather shuttle terminal speed is ~7 m/s
        assert!(vt > 5.0 && vt < 10.0, "unphysical terminal speed {vt}");
    }

    #[test]
    fn velocity_decomposition_45_degrees() {
        let lc = LaunchCondition::new(200.0, 45.0);
        let v = lc.initial_velocity();
        assert_relative_eq!(v.x, v.y, max_relative = 1e-12);
        assert_relative_eq!(v.norm(), 200.0 / 3.6, max_relative = 1e-12);
    }

    #[test]
    fn horizontal_launch_has_no_vertical_velocity() {
        let v = LaunchCondition::new(100.0, 0.0).initial_velocity();
        assert_relative_eq!(v.y, 0.0);
        assert_relative_eq!(v.x, 100.0 / 3.6, max_relative = 1e-12);
    }

    #[test]
    fn validate_rejects_bad_inputs() {
        assert_eq!(
            LaunchCondition::new(0.0, 45.0).validate(),
            Err(SimError::NonPositiveSpeed { speed_kmh: 0.0 })
        );
        assert_eq!(
            LaunchCondition::new(-10.0, 45.0).validate(),
            Err(SimError::NonPositiveSpeed { speed_kmh: -10.0 })
        );
        assert_eq!(
            LaunchCondition::new(100.0, 45.0).from_height(-0.1).validate(),
            Err(SimError::NegativeLaunchHeight { height: -0.1 })
        );
        assert_eq!(
            LaunchCondition::new(f64::NAN, 45.0).validate(),
            Err(SimError::NonFiniteInput)
        );
    }

    #[test]
    fn validate_accepts_reference_conditions() {
        assert!(LaunchCondition::new(200.0, 45.0).validate().is_ok());
        assert!(LaunchCondition::new(100.0, 55.0).at(4.67).validate().is_ok());
        // Ground-level contact is allowed; only negative heights are not.
        assert!(LaunchCondition::new(50.0, 30.0).from_height(0.0).validate().is_ok());
        // Out-of-range angles are documented as nonsensical, not rejected.
        assert!(LaunchCondition::new(50.0, 170.0).validate().is_ok());
    }
}
