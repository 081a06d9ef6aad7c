//! First-person camera used to walk the scene.
//!
//! Interaction targeting casts from this camera's view centre, so looking is
//! also aiming.

/// Camera spawn, look/move controller and its settings.
pub mod first_person;

pub use first_person::{CameraSettings, FirstPersonCamera, camera_controller, spawn_camera};
