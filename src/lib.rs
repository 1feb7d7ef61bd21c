//! Mascot Physics - one-body 2D kinematics for the floating mascot widget
//!
//! Architecture:
//! - core/        - Logging and the random spin source
//! - domain/      - Body, dimensions and config
//! - systems/     - The physics engine
//! - simulation/  - wasm-bindgen facade for the JS animation driver

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::log::info("🦀 Mascot physics engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::random::{SpinSource, Xorshift32};
pub use domain::{Body, Dimensions, PhysicsConfig, PhysicsConfigPatch};
pub use simulation::Mascot;
pub use systems::physics::{PhysicsEngine, StepResult};
