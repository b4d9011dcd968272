use nalgebra::Vector2;

use crate::shuttle::Shuttle;

/// Speed below which drag is treated as zero to avoid normalizing a
/// zero-length velocity vector.
const SPEED_EPS: f64 = 1e-9;

/// Aerodynamic drag force opposing velocity: magnitude k * v^n.
pub fn drag_force(vel: &Vector2<f64>, shuttle: &Shuttle) -> Vector2<f64> {
    let speed = vel.norm();
    if speed > SPEED_EPS {
        let mag = shuttle.drag_constant() * speed.powf(shuttle.drag_exponent);
        -vel.normalize() * mag
    } else {
        Vector2::zeros()
    }
}

/// Drag acceleration: drag force divided by projectile mass.
pub fn drag_accel(vel: &Vector2<f64>, shuttle: &Shuttle) -> Vector2<f64> {
    drag_force(vel, shuttle) / shuttle.mass
}
