use serde::Serialize;

/// Kinematic state of the mascot.
///
/// Owned by the driver. The engine borrows it for one call at a time and
/// never keeps a reference. Fields must stay finite; nothing checks this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    /// Top-left corner of the bounding box (pixels, container space)
    pub x: f32,
    pub y: f32,
    /// Velocity (pixels per step)
    pub vx: f32,
    pub vy: f32,
    /// Rotation (radians, accumulated, never wrapped)
    pub angle: f32,
    /// Radians per step
    pub angular_velocity: f32,
}

impl Body {
    /// A body at rest at `(x, y)`.
    pub fn at(x: f32, y: f32) -> Self {
        Self { x, y, ..Self::default() }
    }
}

/// Pixel size of the container or of the body, measured by the driver each frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_starts_motionless() {
        let body = Body::at(12.0, -3.5);
        assert_eq!(body.x, 12.0);
        assert_eq!(body.y, -3.5);
        assert_eq!(body.vx, 0.0);
        assert_eq!(body.vy, 0.0);
        assert_eq!(body.angle, 0.0);
        assert_eq!(body.angular_velocity, 0.0);
    }

    #[test]
    fn json_uses_camel_case_keys() {
        let body = Body {
            x: 1.0,
            y: 2.0,
            vx: 3.0,
            vy: 4.0,
            angle: 0.5,
            angular_velocity: -1.5,
        };
        let value = serde_json::to_value(body).expect("body serializes");
        assert_eq!(value["x"], 1.0);
        assert_eq!(value["vy"], 4.0);
        assert_eq!(value["angularVelocity"], -1.5);
        assert!(value.get("angular_velocity").is_none());
    }
}
