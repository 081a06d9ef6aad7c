/// Default LOD band edges in world units.
pub const DEFAULT_LOD_NEAR: f32 = 15.0;
pub const DEFAULT_LOD_MEDIUM: f32 = 35.0;
pub const DEFAULT_LOD_FAR: f32 = 70.0;

/// Shininess ceiling applied to nodes in the medium band.
pub const REDUCED_SHININESS: f32 = 10.0;
