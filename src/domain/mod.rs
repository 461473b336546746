//! Domain layer
//!
//! Value objects and the ports the bundle pipeline depends on. Nothing in
//! here touches the filesystem or spawns processes.

pub mod ports;
pub mod value_objects;
