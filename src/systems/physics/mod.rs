//! PhysicsEngine - one-body kinematics for the mascot widget
//!
//! The engine owns only its config and a spin source. Every operation borrows
//! a caller-owned `Body`, mutates it, and lets go. The body's phase (falling,
//! bouncing, resting) is never stored; it is read off its velocities.
//!
//! Per-frame order inside `step`:
//! gravity -> friction -> position -> ground collision -> wall collision.
//! Collisions are resolved after integration, so a fast body can overshoot a
//! boundary within one frame before it is clamped back.

mod collision;
mod forces;
mod gestures;
mod types;


pub use collision::{BOUNCE_SPEED_THRESHOLD, SETTLE_SPIN_DECAY};
pub use forces::DEFAULT_DELTA_TIME;
pub use gestures::DEFAULT_REST_THRESHOLD;
pub use types::StepResult;

use crate::core::random::{SpinSource, Xorshift32};
use crate::domain::{Body, Dimensions, PhysicsConfig, PhysicsConfigPatch};

pub struct PhysicsEngine<S: SpinSource = Xorshift32> {
    config: PhysicsConfig,
    spin: S,
}

impl PhysicsEngine<Xorshift32> {
    /// Defaults overlaid with `patch`, host-seeded spin.
    pub fn new(patch: &PhysicsConfigPatch) -> Self {
        Self::with_spin_source(patch, Xorshift32::from_entropy())
    }
}

impl Default for PhysicsEngine<Xorshift32> {
    fn default() -> Self {
        Self::new(&PhysicsConfigPatch::default())
    }
}

impl<S: SpinSource> PhysicsEngine<S> {
    pub fn with_spin_source(patch: &PhysicsConfigPatch, spin: S) -> Self {
        Self {
            config: PhysicsConfig::default().merged(patch),
            spin,
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Merge over the current config. Takes effect from the next call.
    pub fn update_config(&mut self, patch: &PhysicsConfigPatch) {
        self.config.merge(patch);
    }

    pub fn apply_gravity(&self, body: &mut Body) {
        forces::apply_gravity(&self.config, body);
    }

    pub fn apply_friction(&self, body: &mut Body) {
        forces::apply_friction(&self.config, body);
    }

    /// Pass `DEFAULT_DELTA_TIME` for one tick.
    pub fn update_position(&self, body: &mut Body, delta_time: f32) {
        forces::update_position(body, delta_time);
    }

    pub fn handle_ground_collision(
        &mut self,
        body: &mut Body,
        container_height: f32,
        body_height: f32,
    ) -> bool {
        collision::handle_ground_collision(
            &self.config,
            &mut self.spin,
            body,
            container_height,
            body_height,
        )
    }

    pub fn handle_wall_collision(
        &mut self,
        body: &mut Body,
        container_width: f32,
        body_width: f32,
    ) -> bool {
        collision::handle_wall_collision(
            &self.config,
            &mut self.spin,
            body,
            container_width,
            body_width,
        )
    }

    pub fn apply_impulse(&self, body: &mut Body, impulse_x: f32, impulse_y: f32) {
        forces::apply_impulse(body, impulse_x, impulse_y);
    }

    /// The engine keeps no "dragging" flag; the caller stops stepping while dragging.
    pub fn apply_drag(&self, body: &mut Body, x: f32, y: f32) {
        gestures::apply_drag(body, x, y);
    }

    pub fn throw_object(&mut self, body: &mut Body, throw_power: f32, angle_degrees: f32) {
        gestures::throw_object(&mut self.spin, body, throw_power, angle_degrees);
    }

    /// Pass `DEFAULT_REST_THRESHOLD` for the usual cutoff.
    pub fn is_at_rest(&self, body: &Body, threshold: f32) -> bool {
        gestures::is_at_rest(body, threshold)
    }

    /// Advance one frame.
    pub fn step(
        &mut self,
        body: &mut Body,
        container: Dimensions,
        body_size: Dimensions,
    ) -> StepResult {
        self.apply_gravity(body);
        self.apply_friction(body);
        self.update_position(body, DEFAULT_DELTA_TIME);

        // Both handlers always run
        let ground = self.handle_ground_collision(body, container.height, body_size.height);
        let wall = self.handle_wall_collision(body, container.width, body_size.width);

        StepResult { bounced: ground || wall }
    }
}
