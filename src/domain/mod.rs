//! Domain types: the simulated body and the engine configuration

pub mod body;
pub mod config;

pub use body::{Body, Dimensions};
pub use config::{PhysicsConfig, PhysicsConfigPatch};
