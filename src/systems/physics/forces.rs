use crate::domain::{Body, PhysicsConfig};

/// One discrete tick
pub const DEFAULT_DELTA_TIME: f32 = 1.0;

/// Apply gravity to the body's vertical velocity.
/// Unconditional: no rest or ground check.
#[inline(always)]
pub fn apply_gravity(config: &PhysicsConfig, body: &mut Body) {
    body.vy += config.gravity;
}

/// Decay linear and angular velocity
#[inline(always)]
pub fn apply_friction(config: &PhysicsConfig, body: &mut Body) {
    body.vx *= config.friction;
    body.vy *= config.friction;
    body.angular_velocity *= config.angular_damping;
}

/// Explicit Euler integration of position and angle over `delta_time` ticks
#[inline(always)]
pub fn update_position(body: &mut Body, delta_time: f32) {
    body.x += body.vx * delta_time;
    body.y += body.vy * delta_time;
    body.angle += body.angular_velocity * delta_time;
}

/// Additive velocity change. Position and spin are left alone.
#[inline]
pub fn apply_impulse(body: &mut Body, impulse_x: f32, impulse_y: f32) {
    body.vx += impulse_x;
    body.vy += impulse_y;
}
