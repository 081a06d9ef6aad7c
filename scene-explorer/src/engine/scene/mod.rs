//! Host-side node attributes the core subsystems read and write.
//!
//! Scene construction itself lives outside the core; this module only defines
//! the capability-tagged material every animated or LOD-managed node carries,
//! the precomputed bounding sphere used by frustum culling, and the systems
//! that keep both in step with Bevy's own mesh data.

/// Capability-tagged material and its sync into `StandardMaterial` assets.
pub mod material;

/// Bounding spheres derived from mesh `Aabb`s.
pub mod bounds;

use bevy::prelude::*;
use bevy::render::view::VisibilitySystems;

pub use bounds::BoundingSphere;
pub use material::SurfaceMaterial;

use bounds::compute_bounding_spheres;
use material::sync_surface_materials;

pub struct SceneNodePlugin;

impl Plugin for SceneNodePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (
                sync_surface_materials,
                compute_bounding_spheres.after(VisibilitySystems::CalculateBounds),
            ),
        );
    }
}
