use bevy::prelude::*;
use bevy::render::primitives::Frustum;

use crate::engine::scene::BoundingSphere;

/// Clip-from-view matrix of a Bevy projection, matching the reversed-z
/// convention Bevy renders with. `None` for custom projections.
pub fn clip_from_view(projection: &Projection) -> Option<Mat4> {
    match projection {
        Projection::Perspective(perspective) => Some(Mat4::perspective_infinite_reverse_rh(
            perspective.fov,
            perspective.aspect_ratio,
            perspective.near,
        )),
        Projection::Orthographic(ortho) => Some(Mat4::orthographic_rh(
            ortho.area.min.x,
            ortho.area.max.x,
            ortho.area.min.y,
            ortho.area.max.y,
            // Reversed z: far maps to 0, near to 1.
            ortho.far,
            ortho.near,
        )),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// Frustum from the projection and the inverse of the camera's world matrix.
pub fn camera_frustum(clip_from_view: Mat4, camera: &GlobalTransform) -> Frustum {
    let clip_from_world = clip_from_view * camera.compute_matrix().inverse();
    Frustum::from_clip_from_world(&clip_from_world)
}

/// Distance is the LOD pass's concern, so the far plane is not tested.
pub fn sphere_in_frustum(
    frustum: &Frustum,
    sphere: &BoundingSphere,
    transform: &GlobalTransform,
) -> bool {
    frustum.intersects_sphere(&sphere.to_world(transform), false)
}
