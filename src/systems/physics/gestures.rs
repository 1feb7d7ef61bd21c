//! Operations driven by the pointer layer rather than by the frame loop

use std::f32::consts::PI;

use crate::core::random::{throw_spin, SpinSource};
use crate::domain::Body;

/// Default cutoff for `is_at_rest`
pub const DEFAULT_REST_THRESHOLD: f32 = 0.1;

/// Pin the body under the pointer and kill all motion. The angle is kept.
pub fn apply_drag(body: &mut Body, x: f32, y: f32) {
    body.x = x;
    body.y = y;
    body.vx = 0.0;
    body.vy = 0.0;
    body.angular_velocity = 0.0;
}

/// Launch the body. Screen space: 0° points right, +90° down, -90° up.
pub fn throw_object<S: SpinSource>(
    spin: &mut S,
    body: &mut Body,
    throw_power: f32,
    angle_degrees: f32,
) {
    let radians = angle_degrees * PI / 180.0;
    let (sin, cos) = radians.sin_cos();
    body.vx = cos * throw_power;
    body.vy = sin * throw_power;
    body.angular_velocity = throw_spin(spin.next_unit());
}

/// All three of |vx|, |vy| and |angular velocity| strictly under `threshold`
pub fn is_at_rest(body: &Body, threshold: f32) -> bool {
    body.vx.abs() < threshold
        && body.vy.abs() < threshold
        && body.angular_velocity.abs() < threshold
}
