use wasm_bindgen::prelude::*;

use crate::core::log;
use crate::domain::{Body, Dimensions, PhysicsConfigPatch};
use crate::systems::physics::{PhysicsEngine, DEFAULT_DELTA_TIME, DEFAULT_REST_THRESHOLD};

#[wasm_bindgen]
pub struct Mascot {
    engine: PhysicsEngine,
    body: Body,
}

#[wasm_bindgen]
impl Mascot {
    /// Mascot at rest at `(x, y)` with the default config
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            engine: PhysicsEngine::default(),
            body: Body::at(x, y),
        }
    }

    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(x: f32, y: f32, json: String) -> Result<Mascot, JsValue> {
        let patch = PhysicsConfigPatch::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            engine: PhysicsEngine::new(&patch),
            body: Body::at(x, y),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f32 { self.body.x }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f32 { self.body.y }

    #[wasm_bindgen(getter)]
    pub fn vx(&self) -> f32 { self.body.vx }

    #[wasm_bindgen(getter)]
    pub fn vy(&self) -> f32 { self.body.vy }

    #[wasm_bindgen(getter)]
    pub fn angle(&self) -> f32 { self.body.angle }

    #[wasm_bindgen(getter, js_name = angularVelocity)]
    pub fn angular_velocity(&self) -> f32 { self.body.angular_velocity }

    /// Advance one frame. Returns true when the mascot bounced.
    pub fn step(
        &mut self,
        container_width: f32,
        container_height: f32,
        body_width: f32,
        body_height: f32,
    ) -> bool {
        self.engine
            .step(
                &mut self.body,
                Dimensions::new(container_width, container_height),
                Dimensions::new(body_width, body_height),
            )
            .bounced
    }

    #[wasm_bindgen(js_name = applyGravity)]
    pub fn apply_gravity(&mut self) {
        self.engine.apply_gravity(&mut self.body);
    }

    #[wasm_bindgen(js_name = applyFriction)]
    pub fn apply_friction(&mut self) {
        self.engine.apply_friction(&mut self.body);
    }

    /// `deltaTime` defaults to one tick when omitted
    #[wasm_bindgen(js_name = updatePosition)]
    pub fn update_position(&mut self, delta_time: Option<f32>) {
        self.engine
            .update_position(&mut self.body, delta_time.unwrap_or(DEFAULT_DELTA_TIME));
    }

    #[wasm_bindgen(js_name = handleGroundCollision)]
    pub fn handle_ground_collision(&mut self, container_height: f32, body_height: f32) -> bool {
        self.engine
            .handle_ground_collision(&mut self.body, container_height, body_height)
    }

    #[wasm_bindgen(js_name = handleWallCollision)]
    pub fn handle_wall_collision(&mut self, container_width: f32, body_width: f32) -> bool {
        self.engine
            .handle_wall_collision(&mut self.body, container_width, body_width)
    }

    #[wasm_bindgen(js_name = applyImpulse)]
    pub fn apply_impulse(&mut self, impulse_x: f32, impulse_y: f32) {
        self.engine.apply_impulse(&mut self.body, impulse_x, impulse_y);
    }

    #[wasm_bindgen(js_name = applyDrag)]
    pub fn apply_drag(&mut self, x: f32, y: f32) {
        self.engine.apply_drag(&mut self.body, x, y);
    }

    #[wasm_bindgen(js_name = throwObject)]
    pub fn throw_object(&mut self, throw_power: f32, angle_degrees: f32) {
        self.engine.throw_object(&mut self.body, throw_power, angle_degrees);
    }

    /// `threshold` defaults to 0.1 when omitted
    #[wasm_bindgen(js_name = isAtRest)]
    pub fn is_at_rest(&self, threshold: Option<f32>) -> bool {
        self.engine
            .is_at_rest(&self.body, threshold.unwrap_or(DEFAULT_REST_THRESHOLD))
    }

    /// Merge a partial config, e.g. `{"gravity": 0.8}`. On error nothing changes.
    #[wasm_bindgen(js_name = updateConfig)]
    pub fn update_config(&mut self, json: String) -> Result<(), JsValue> {
        self.update_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = configJson)]
    pub fn config_json(&self) -> String {
        self.engine.config().to_json()
    }

    #[wasm_bindgen(js_name = bodyJson)]
    pub fn body_json(&self) -> String {
        serde_json::to_string(&self.body).unwrap_or_default()
    }
}

impl Mascot {
    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn update_config_json(&mut self, json: &str) -> Result<(), String> {
        match PhysicsConfigPatch::from_json(json) {
            Ok(patch) => {
                self.engine.update_config(&patch);
                Ok(())
            }
            Err(e) => {
                log::warn(&format!("mascot: config update rejected: {e}"));
                Err(e)
            }
        }
    }
}
