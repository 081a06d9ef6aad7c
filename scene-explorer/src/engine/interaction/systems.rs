use bevy::ecs::system::SystemParam;
use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::render::primitives::Aabb;

use super::InteractionSettings;
use super::commands::{activate, apply_hover_transition};
use super::ray::{RayHit, cast_ray};
use super::targeting::InteractionTargeting;

/// Casts the fixed view-centre ray against every node with mesh bounds.
#[derive(SystemParam)]
pub struct ViewRayCaster<'w, 's> {
    cameras: Query<'w, 's, &'static GlobalTransform, With<Camera3d>>,
    bounds: Query<'w, 's, (Entity, &'static GlobalTransform, &'static Aabb)>,
    settings: Res<'w, InteractionSettings>,
}

impl ViewRayCaster<'_, '_> {
    /// Hits nearest-first; empty without exactly one 3D camera.
    pub fn cast(&self) -> Vec<RayHit> {
        let Ok(camera) = self.cameras.single() else {
            return Vec::new();
        };
        let origin = camera.translation();
        let dir = camera.forward().as_vec3();
        cast_ray(origin, dir, self.settings.max_ray_distance, self.bounds.iter())
    }
}

/// Re-resolve the target when the pointer or the camera moves.
pub fn update_hover(
    mut motion: EventReader<MouseMotion>,
    moved_cameras: Query<(), (With<Camera3d>, Changed<GlobalTransform>)>,
    caster: ViewRayCaster,
    targeting: Res<InteractionTargeting>,
    mut commands: Commands,
) {
    let pointer_moved = motion.read().count() > 0;
    if !pointer_moved && moved_cameras.is_empty() && !targeting.is_changed() {
        return;
    }

    let target = targeting.resolve_target(&caster.cast());
    if let Some(transition) = targeting.hover_transition(target) {
        commands.queue(move |world: &mut World| apply_hover_transition(world, transition));
    }
}

/// Resolve independently of hover and fire `Interacted` on the target.
pub fn handle_activation(
    mouse_button: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    caster: ViewRayCaster,
    targeting: Res<InteractionTargeting>,
    mut commands: Commands,
) {
    if !caster.settings.activation_enabled {
        return;
    }
    if !mouse_button.just_pressed(MouseButton::Left) && !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }

    if let Some(node) = targeting.resolve_target(&caster.cast()) {
        commands.queue(move |world: &mut World| activate(world, node));
    }
}
