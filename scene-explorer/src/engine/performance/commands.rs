//! LOD registration against live nodes.

use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;

use super::governor::PerformanceGovernor;
use super::lod::{LodConfig, LodEntry};
use crate::engine::scene::SurfaceMaterial;

/// Capture the node's current fidelity and put it under LOD control.
pub fn register_lod(world: &mut World, node: Entity, config: LodConfig) {
    let Ok(entity) = world.get_entity(node) else {
        warn!("LOD registration skipped: node {} does not exist", node);
        return;
    };
    let entry = LodEntry::capture(
        node,
        config,
        entity.get::<SurfaceMaterial>(),
        !entity.contains::<NotShadowCaster>(),
    );
    if let Some(mut governor) = world.get_resource_mut::<PerformanceGovernor>() {
        governor.register_lod(entry);
    }
}

/// Release the node and put its registration-time fidelity back.
pub fn unregister_lod(world: &mut World, node: Entity) {
    let Some(mut governor) = world.get_resource_mut::<PerformanceGovernor>() else {
        return;
    };
    let Some(entry) = governor.unregister_lod(node) else {
        return;
    };
    let Ok(mut entity) = world.get_entity_mut(node) else {
        return;
    };
    if let Some(shininess) = entry.baseline_shininess {
        if let Some(mut material) = entity.get_mut::<SurfaceMaterial>() {
            if material.shininess() != Some(shininess) {
                material.set_shininess(shininess);
            }
        }
    }
    if entry.baseline_casts_shadows {
        entity.remove::<NotShadowCaster>();
    } else {
        entity.insert(NotShadowCaster);
    }
    entity.insert(Visibility::Inherited);
}

pub trait LodCommands {
    fn register_lod(&mut self, node: Entity, config: LodConfig);
    fn unregister_lod(&mut self, node: Entity);
}

impl LodCommands for Commands<'_, '_> {
    fn register_lod(&mut self, node: Entity, config: LodConfig) {
        self.queue(move |world: &mut World| register_lod(world, node, config));
    }

    fn unregister_lod(&mut self, node: Entity) {
        self.queue(move |world: &mut World| unregister_lod(world, node));
    }
}
