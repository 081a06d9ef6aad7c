//! World-level registry operations and the `Commands` extension queuing them.
//!
//! These read the node's current state on registration and write the
//! baseline back on removal, which the registry itself cannot do.

use std::time::Duration;

use bevy::prelude::*;

use super::config::AnimationConfig;
use super::instance::NodeBaseline;
use super::registry::AnimationRegistry;
use crate::engine::scene::SurfaceMaterial;

fn now(world: &World) -> Duration {
    world
        .get_resource::<Time>()
        .map(|time| time.elapsed())
        .unwrap_or_default()
}

pub fn register_animation(world: &mut World, id: String, node: Entity, config: AnimationConfig) {
    let Some(transform) = world.get::<Transform>(node) else {
        warn!("Animation '{}' skipped: node {} has no transform", id, node);
        return;
    };
    let baseline = NodeBaseline::capture(transform, world.get::<SurfaceMaterial>(node));
    let now = now(world);
    let Some(mut registry) = world.get_resource_mut::<AnimationRegistry>() else {
        return;
    };
    if registry
        .register(id.clone(), node, config, baseline, now)
        .is_some()
    {
        debug!("Animation '{}' replaced without restoring its baseline", id);
    }
}

pub fn unregister_animation(world: &mut World, id: &str) {
    let now = now(world);
    let Some(mut registry) = world.get_resource_mut::<AnimationRegistry>() else {
        return;
    };
    let Some(instance) = registry.unregister(id, now) else {
        return;
    };
    let Ok(mut node) = world.get_entity_mut(instance.node) else {
        debug!("Animation '{}' removed after its node despawned", id);
        return;
    };
    let mut material = node.get::<SurfaceMaterial>().copied();
    if let Some(mut transform) = node.get_mut::<Transform>() {
        instance.baseline().restore(&mut transform, material.as_mut());
    }
    if let Some(material) = material {
        node.insert(material);
    }
}

pub fn set_animation_playing(world: &mut World, id: &str, playing: bool) {
    let now = now(world);
    let Some(mut registry) = world.get_resource_mut::<AnimationRegistry>() else {
        return;
    };
    let found = if playing {
        registry.play(id, now)
    } else {
        registry.pause(id, now)
    };
    if !found {
        debug!("No animation named '{}'", id);
    }
}

/// Animation registry access from systems.
pub trait AnimationCommands {
    fn register_animation(&mut self, id: impl Into<String>, node: Entity, config: AnimationConfig);
    fn unregister_animation(&mut self, id: impl Into<String>);
    fn play_animation(&mut self, id: impl Into<String>);
    fn pause_animation(&mut self, id: impl Into<String>);
}

impl AnimationCommands for Commands<'_, '_> {
    fn register_animation(&mut self, id: impl Into<String>, node: Entity, config: AnimationConfig) {
        let id = id.into();
        self.queue(move |world: &mut World| register_animation(world, id, node, config));
    }

    fn unregister_animation(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.queue(move |world: &mut World| unregister_animation(world, &id));
    }

    fn play_animation(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.queue(move |world: &mut World| set_animation_playing(world, &id, true));
    }

    fn pause_animation(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.queue(move |world: &mut World| set_animation_playing(world, &id, false));
    }
}
