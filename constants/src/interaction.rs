/// Interaction radius given to entities registered without one.
pub const DEFAULT_INTERACTION_RADIUS: f32 = 5.0;

/// Rays are not traced past this distance from the camera.
pub const MAX_RAY_DISTANCE: f32 = 100.0;
