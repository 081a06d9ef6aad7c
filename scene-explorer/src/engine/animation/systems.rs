use bevy::prelude::*;

use super::instance::AnimatedAttribute;
use super::registry::AnimationRegistry;
use crate::engine::scene::SurfaceMaterial;

/// Run condition: the shared tick only runs while something is active.
pub fn animations_running(registry: Res<AnimationRegistry>) -> bool {
    registry.is_running()
}

/// Advance every active animation from the shared clock.
pub fn tick_animations(
    time: Res<Time>,
    registry: Res<AnimationRegistry>,
    mut nodes: Query<(&mut Transform, Option<&mut SurfaceMaterial>)>,
) {
    let now = time.elapsed();
    for instance in registry.active() {
        let Some(attribute) = instance.evaluate(now) else {
            continue;
        };
        let Ok((mut transform, material)) = nodes.get_mut(instance.node) else {
            continue;
        };
        // Only touch the material when writing it, so change detection stays quiet.
        let material = match attribute {
            AnimatedAttribute::Emissive(_) => material.map(Mut::into_inner),
            _ => None,
        };
        attribute.apply(&mut transform, material);
    }
}
