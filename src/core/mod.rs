//! Core utilities shared by the engine and the wasm facade

pub mod log;
pub mod random;
