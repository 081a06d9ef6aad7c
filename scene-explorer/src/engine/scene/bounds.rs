use bevy::prelude::*;
use bevy::render::primitives::{Aabb, Sphere};

/// Local-space bounding sphere of a mesh-bearing node.
///
/// Nodes without one are skipped by frustum culling.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Smallest sphere enclosing the box.
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: Vec3::from(aabb.center),
            radius: Vec3::from(aabb.half_extents).length(),
        }
    }

    /// Sphere in world space. Non-uniform scale is covered by the largest axis.
    pub fn to_world(&self, transform: &GlobalTransform) -> Sphere {
        let (scale, _, _) = transform.to_scale_rotation_translation();
        Sphere {
            center: transform.transform_point(self.center).into(),
            radius: self.radius * scale.abs().max_element(),
        }
    }
}

pub fn compute_bounding_spheres(
    mut commands: Commands,
    meshes: Query<(Entity, &Aabb), (With<Mesh3d>, Changed<Aabb>)>,
) {
    for (entity, aabb) in &meshes {
        commands
            .entity(entity)
            .insert(BoundingSphere::from_aabb(aabb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_encloses_box_corners() {
        let aabb = Aabb::from_min_max(Vec3::new(-1.0, -2.0, -2.0), Vec3::new(1.0, 2.0, 2.0));
        let sphere = BoundingSphere::from_aabb(&aabb);
        assert_eq!(sphere.center, Vec3::ZERO);
        assert!((sphere.radius - 3.0).abs() < 1e-5);
    }

    #[test]
    fn world_sphere_follows_translation_and_scale() {
        let sphere = BoundingSphere::new(Vec3::ZERO, 1.0);
        let transform = GlobalTransform::from(
            Transform::from_xyz(4.0, 0.0, 0.0).with_scale(Vec3::new(1.0, 3.0, 2.0)),
        );
        let world = sphere.to_world(&transform);
        assert!((Vec3::from(world.center) - Vec3::new(4.0, 0.0, 0.0)).length() < 1e-5);
        assert!((world.radius - 3.0).abs() < 1e-5);
    }
}
