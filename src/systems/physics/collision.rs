use crate::core::random::{collision_spin, SpinSource};
use crate::domain::{Body, PhysicsConfig};

/// Above this vertical speed a ground hit bounces; at or below it the body settles.
pub const BOUNCE_SPEED_THRESHOLD: f32 = 1.0;
/// Residual spin kept per settling frame
pub const SETTLE_SPIN_DECAY: f32 = 0.9;

/// Resolve contact with the ground line.
///
/// Returns `true` only when the body bounced. A settling body (slow enough to
/// stop) returns `false`, as does a body still above the ground.
pub fn handle_ground_collision<S: SpinSource>(
    config: &PhysicsConfig,
    spin: &mut S,
    body: &mut Body,
    container_height: f32,
    body_height: f32,
) -> bool {
    let ground_y = container_height - config.ground_level - body_height;
    // A NaN position compares false here and passes through untouched
    if body.y >= ground_y {
        body.y = ground_y;

        if body.vy.abs() > BOUNCE_SPEED_THRESHOLD {
            body.vy = -body.vy * config.bounce_damping;
            body.angular_velocity = collision_spin(spin.next_unit());
            return true;
        }

        body.vy = 0.0;
        body.angular_velocity *= SETTLE_SPIN_DECAY;
    }

    false
}

/// Resolve contact with the left and right walls (left checked first).
///
/// Any contact bounces; walls have no settle branch. The reflected velocity
/// always points back into the container, whatever the incoming direction.
pub fn handle_wall_collision<S: SpinSource>(
    config: &PhysicsConfig,
    spin: &mut S,
    body: &mut Body,
    container_width: f32,
    body_width: f32,
) -> bool {
    let mut bounced = false;

    if body.x <= 0.0 {
        body.x = 0.0;
        body.vx = body.vx.abs() * config.bounce_damping;
        body.angular_velocity = collision_spin(spin.next_unit());
        bounced = true;
    }

    let right = container_width - body_width;
    if body.x >= right {
        body.x = right;
        body.vx = -body.vx.abs() * config.bounce_damping;
        body.angular_velocity = collision_spin(spin.next_unit());
        bounced = true;
    }

    bounced
}
