//! JavaScript-facing surface
//!
//! The kernel never holds a body between calls, but JS cannot lend a `&mut`
//! across the boundary. `Mascot` plays the driver-side owner: it keeps one
//! body and one engine and forwards each call.

mod facade;


pub use facade::Mascot;
