use thiserror::Error;

/// Errors raised when a launch condition cannot be simulated.
///
/// The integration itself cannot fail once its inputs pass validation, so
/// every variant here is detected at entry rather than mid-loop.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("launch speed must be positive, got {speed_kmh} km/h")]
    NonPositiveSpeed { speed_kmh: f64 },

    #[error("launch height must be non-negative, got {height} m")]
    NegativeLaunchHeight { height: f64 },

    #[error("launch condition contains a non-finite value")]
    NonFiniteInput,
}
