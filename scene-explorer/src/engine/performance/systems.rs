use std::collections::HashMap;

use bevy::pbr::{
    CascadeShadowConfigBuilder, DirectionalLightShadowMap, DistanceFog, FogFalloff,
    NotShadowCaster,
};
use bevy::prelude::*;
use constants::quality::TierBundle;
use constants::render_settings::FOG_COLOUR;

use super::culling::{camera_frustum, clip_from_view, sphere_in_frustum};
use super::governor::PerformanceGovernor;
use super::lod::LodLevel;
use super::tier::shadow_filtering;
use crate::engine::scene::{BoundingSphere, SurfaceMaterial};

/// Count this frame and reclassify once the sampling window closes.
pub fn sample_frame_rate(time: Res<Time>, mut governor: ResMut<PerformanceGovernor>) {
    governor.record_frame();
    if let Some(tier) = governor.sample_and_classify(time.elapsed()) {
        info!(
            "Quality tier -> {} ({:.1} fps)",
            tier.as_str(),
            governor.fps()
        );
    }
}

/// Push the current tier bundle into Bevy's lighting and fog settings.
///
/// Runs against every camera and light when the bundle changes, otherwise only
/// against ones spawned since the last frame.
pub fn apply_quality_settings(
    mut commands: Commands,
    governor: Res<PerformanceGovernor>,
    mut last_applied: Local<Option<TierBundle>>,
    cameras: Query<(Entity, Ref<Camera3d>)>,
    lights: Query<(Entity, Ref<DirectionalLight>)>,
) {
    let bundle = *governor.applied_bundle();
    let changed = *last_applied != Some(bundle);
    if changed {
        commands.insert_resource(DirectionalLightShadowMap {
            size: bundle.shadow_map_size,
        });
        *last_applied = Some(bundle);
    }

    for (entity, camera) in &cameras {
        if !changed && !camera.is_added() {
            continue;
        }
        let mut camera = commands.entity(entity);
        camera.insert(shadow_filtering(bundle.shadow_technique));
        if bundle.fog_enabled {
            camera.insert(DistanceFog {
                color: FOG_COLOUR,
                falloff: FogFalloff::Linear {
                    start: bundle.fog_start,
                    end: bundle.fog_end,
                },
                ..default()
            });
        } else {
            camera.remove::<DistanceFog>();
        }
    }

    for (entity, light) in &lights {
        if !changed && !light.is_added() {
            continue;
        }
        commands.entity(entity).insert(
            CascadeShadowConfigBuilder {
                maximum_distance: bundle.max_shadow_distance,
                ..default()
            }
            .build(),
        );
    }
}

/// LOD pass over every registered entry, then the frustum pass over every
/// node carrying a `BoundingSphere`.
///
/// The frustum result overrides the LOD result, so a node hidden by distance
/// can be shown again while in view. Nodes that are neither LOD-managed nor
/// bounded are left alone.
pub fn update_lod_and_culling(
    mut commands: Commands,
    mut governor: ResMut<PerformanceGovernor>,
    cameras: Query<(&GlobalTransform, &Projection), With<Camera3d>>,
    mut nodes: Query<(
        Entity,
        &GlobalTransform,
        &mut Visibility,
        Option<&mut SurfaceMaterial>,
        Has<NotShadowCaster>,
        Option<&BoundingSphere>,
    )>,
) {
    let Ok((camera, projection)) = cameras.single() else {
        return;
    };
    let options = *governor.options();
    let camera_position = camera.translation();

    let mut lod_verdicts = HashMap::with_capacity(governor.lod_entries().len());
    for entry in governor.lod_entries() {
        let Ok((_, transform, _, material, shadowless, _)) = nodes.get_mut(entry.node) else {
            continue;
        };

        let level = if options.lod_enabled {
            entry
                .config
                .level(transform.translation().distance(camera_position))
        } else {
            LodLevel::Near
        };

        if let (Some(shininess), Some(mut material)) =
            (entry.shininess_at(level, options.reduced_shininess), material)
        {
            if material.shininess() != Some(shininess) {
                material.set_shininess(shininess);
            }
        }
        let casts_shadows = entry.casts_shadows_at(level);
        if casts_shadows == shadowless {
            if casts_shadows {
                commands.entity(entry.node).remove::<NotShadowCaster>();
            } else {
                commands.entity(entry.node).insert(NotShadowCaster);
            }
        }
        lod_verdicts.insert(entry.node, level.is_visible());
    }

    let frustum = options
        .culling_enabled
        .then(|| clip_from_view(projection))
        .flatten()
        .map(|clip_from_view| camera_frustum(clip_from_view, camera));

    let mut visible_count = 0;
    for (entity, transform, mut visibility, _, _, sphere) in &mut nodes {
        let in_view = frustum
            .as_ref()
            .zip(sphere)
            .map(|(frustum, sphere)| sphere_in_frustum(frustum, sphere, transform));
        let visible = match (in_view, lod_verdicts.get(&entity)) {
            (Some(in_view), _) => in_view,
            (None, Some(&lod_visible)) => lod_visible,
            // Bounded but culling is off.
            (None, None) if sphere.is_some() => true,
            (None, None) => continue,
        };

        visibility.set_if_neq(if visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        });
        if visible {
            visible_count += 1;
        }
    }
    governor.set_visible_count(visible_count);
}
