use bevy::prelude::*;
use bevy::render::primitives::Aabb;

/// One intersection of the view ray with a node's bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub node: Entity,
    pub distance: f32,
}

/// Ray against a mesh `Aabb` carried by a transformed node.
pub fn ray_hits_obb(origin: Vec3, dir: Vec3, xf: &GlobalTransform, aabb: &Aabb) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin);
    let d_local = inv.transform_vector3(dir);
    let center = Vec3::from(aabb.center);
    let he = Vec3::from(aabb.half_extents);
    ray_aabb_hit_t(o_local, d_local, center - he, center + he)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = Vec3::new(
        if ray_direction.x != 0.0 { 1.0 / ray_direction.x } else { f32::INFINITY },
        if ray_direction.y != 0.0 { 1.0 / ray_direction.y } else { f32::INFINITY },
        if ray_direction.z != 0.0 { 1.0 / ray_direction.z } else { f32::INFINITY },
    );

    let t1 = (min - ray_origin) * inv;
    let t2 = (max - ray_origin) * inv;
    let near = t1.min(t2);
    let far = t1.max(t2);

    let tmin = near.max_element();
    let tmax = far.min_element();
    if tmin > tmax || tmax < 0.0 || tmin.is_nan() || tmax.is_nan() {
        return None;
    }
    Some(if tmin >= 0.0 { tmin } else { tmax })
}

/// Intersect every candidate and return hits nearest-first.
pub fn cast_ray<'a>(
    origin: Vec3,
    dir: Vec3,
    max_distance: f32,
    candidates: impl IntoIterator<Item = (Entity, &'a GlobalTransform, &'a Aabb)>,
) -> Vec<RayHit> {
    let mut hits: Vec<RayHit> = candidates
        .into_iter()
        .filter_map(|(node, xf, aabb)| {
            let distance = ray_hits_obb(origin, dir, xf, aabb)?;
            (distance <= max_distance).then_some(RayHit { node, distance })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::from_min_max(Vec3::splat(-0.5), Vec3::splat(0.5))
    }

    #[test]
    fn hits_box_ahead() {
        let xf = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -5.0));
        let t = ray_hits_obb(Vec3::ZERO, Vec3::NEG_Z, &xf, &unit_box()).unwrap();
        assert!((t - 4.5).abs() < 1e-5);
    }

    #[test]
    fn misses_box_behind_or_beside() {
        let behind = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, 5.0));
        assert!(ray_hits_obb(Vec3::ZERO, Vec3::NEG_Z, &behind, &unit_box()).is_none());

        let beside = GlobalTransform::from(Transform::from_xyz(3.0, 0.0, -5.0));
        assert!(ray_hits_obb(Vec3::ZERO, Vec3::NEG_Z, &beside, &unit_box()).is_none());
    }

    #[test]
    fn rotated_box_uses_local_extents() {
        let long = Aabb::from_min_max(Vec3::new(-3.0, -0.5, -0.5), Vec3::new(3.0, 0.5, 0.5));
        let turned = GlobalTransform::from(
            Transform::from_xyz(2.0, 0.0, -6.0)
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        // Unrotated the bar would span x in [-1, 5]; turned it spans z instead.
        assert!(ray_hits_obb(Vec3::ZERO, Vec3::NEG_Z, &turned, &long).is_none());
        let t = ray_hits_obb(Vec3::new(2.0, 0.0, 0.0), Vec3::NEG_Z, &turned, &long).unwrap();
        assert!((t - 3.0).abs() < 1e-4);
    }

    #[test]
    fn cast_orders_nearest_first_and_respects_max_distance() {
        let near = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -3.0));
        let far = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -8.0));
        let too_far = GlobalTransform::from(Transform::from_xyz(0.0, 0.0, -50.0));
        let aabb = unit_box();
        let (a, b, c) = (Entity::from_raw(1), Entity::from_raw(2), Entity::from_raw(3));

        let hits = cast_ray(
            Vec3::ZERO,
            Vec3::NEG_Z,
            20.0,
            [(b, &far, &aabb), (c, &too_far, &aabb), (a, &near, &aabb)],
        );
        assert_eq!(hits.iter().map(|hit| hit.node).collect::<Vec<_>>(), vec![a, b]);
    }
}
