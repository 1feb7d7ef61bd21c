//! Engine configuration
//!
//! `PhysicsConfig` is the full set of tunables. `PhysicsConfigPatch` is the
//! "partial config" the driver hands in: every field optional, merged shallowly
//! over defaults at construction and over the current values afterwards.
//! Nothing is range-checked; damping factors above 1.0 amplify motion.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GRAVITY: f32 = 0.5;
pub const DEFAULT_FRICTION: f32 = 0.98;
pub const DEFAULT_BOUNCE_DAMPING: f32 = 0.6;
pub const DEFAULT_ANGULAR_DAMPING: f32 = 0.95;
pub const DEFAULT_GROUND_LEVEL: f32 = 0.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicsConfig {
    /// Added to `vy` every step
    pub gravity: f32,
    /// Per-step decay of `vx` and `vy`
    pub friction: f32,
    /// Velocity kept after hitting the ground or a wall
    pub bounce_damping: f32,
    /// Per-step decay of the angular velocity
    pub angular_damping: f32,
    /// Inset of the resting surface from the container's bottom edge (pixels)
    pub ground_level: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            bounce_damping: DEFAULT_BOUNCE_DAMPING,
            angular_damping: DEFAULT_ANGULAR_DAMPING,
            ground_level: DEFAULT_GROUND_LEVEL,
        }
    }
}

impl PhysicsConfig {
    /// Overwrite only the fields the patch supplies.
    pub fn merge(&mut self, patch: &PhysicsConfigPatch) {
        if let Some(gravity) = patch.gravity {
            self.gravity = gravity;
        }
        if let Some(friction) = patch.friction {
            self.friction = friction;
        }
        if let Some(bounce_damping) = patch.bounce_damping {
            self.bounce_damping = bounce_damping;
        }
        if let Some(angular_damping) = patch.angular_damping {
            self.angular_damping = angular_damping;
        }
        if let Some(ground_level) = patch.ground_level {
            self.ground_level = ground_level;
        }
    }

    pub fn merged(mut self, patch: &PhysicsConfigPatch) -> Self {
        self.merge(patch);
        self
    }

    pub fn to_json(&self) -> String {
        // Five plain f32 fields; serde_json only fails here on map keys or I/O.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Partial config. `None` leaves the target field as it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PhysicsConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounce_damping: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angular_damping: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_level: Option<f32>,
}

impl PhysicsConfigPatch {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn gravity(mut self, gravity: f32) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn friction(mut self, friction: f32) -> Self {
        self.friction = Some(friction);
        self
    }

    pub fn bounce_damping(mut self, bounce_damping: f32) -> Self {
        self.bounce_damping = Some(bounce_damping);
        self
    }

    pub fn angular_damping(mut self, angular_damping: f32) -> Self {
        self.angular_damping = Some(angular_damping);
        self
    }

    pub fn ground_level(mut self, ground_level: f32) -> Self {
        self.ground_level = Some(ground_level);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, 0.5);
        assert_eq!(config.friction, 0.98);
        assert_eq!(config.bounce_damping, 0.6);
        assert_eq!(config.angular_damping, 0.95);
        assert_eq!(config.ground_level, 0.0);
    }

    #[test]
    fn merge_only_touches_supplied_fields() {
        let mut config = PhysicsConfig::default();
        config.merge(&PhysicsConfigPatch::default().gravity(1.0));
        assert_eq!(config.gravity, 1.0);
        assert_eq!(config.friction, DEFAULT_FRICTION);

        // Second merge layers over the current values, not the defaults
        config.merge(&PhysicsConfigPatch::default().friction(0.5));
        assert_eq!(config.gravity, 1.0);
        assert_eq!(config.friction, 0.5);
        assert_eq!(config.bounce_damping, DEFAULT_BOUNCE_DAMPING);
    }

    #[test]
    fn empty_patch_is_identity() {
        let config = PhysicsConfig::default().merged(&PhysicsConfigPatch::default());
        assert_eq!(config, PhysicsConfig::default());
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let config = PhysicsConfig::default().merged(
            &PhysicsConfigPatch::default()
                .bounce_damping(1.5)
                .ground_level(-20.0),
        );
        assert_eq!(config.bounce_damping, 1.5);
        assert_eq!(config.ground_level, -20.0);
    }

    #[test]
    fn patch_from_json_reads_camel_case() {
        let patch = PhysicsConfigPatch::from_json(r#"{"bounceDamping": 0.8, "groundLevel": 40}"#)
            .expect("valid patch");
        assert_eq!(patch.bounce_damping, Some(0.8));
        assert_eq!(patch.ground_level, Some(40.0));
        assert_eq!(patch.gravity, None);
        assert_eq!(patch.friction, None);
        assert_eq!(patch.angular_damping, None);
    }

    #[test]
    fn patch_from_json_rejects_unknown_keys() {
        let err = PhysicsConfigPatch::from_json(r#"{"bounce_damping": 0.8}"#).unwrap_err();
        assert!(err.contains("bounce_damping"), "unexpected error: {err}");
    }

    #[test]
    fn patch_from_json_rejects_garbage() {
        assert!(PhysicsConfigPatch::from_json("not json").is_err());
        assert!(PhysicsConfigPatch::from_json(r#"{"gravity": "heavy"}"#).is_err());
    }

    #[test]
    fn config_json_round_trips_through_patch() {
        let config = PhysicsConfig::default().merged(&PhysicsConfigPatch::default().gravity(2.0));
        let json = config.to_json();
        assert!(json.contains("\"angularDamping\""));

        let patch = PhysicsConfigPatch::from_json(&json).expect("full config is a valid patch");
        assert_eq!(PhysicsConfig::default().merged(&patch), config);
    }
}
