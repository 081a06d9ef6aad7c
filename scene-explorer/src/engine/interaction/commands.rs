//! World-level registration and hover dispatch.
//!
//! Observers on the entity node run synchronously inside these functions, so
//! hover-end always lands before hover-begin and before the stored hover state
//! changes.

use bevy::prelude::*;

use super::entity::{HoverEnded, HoverStarted, InteractableEntity, Interacted};
use super::targeting::{HoverTransition, InteractionTargeting};

/// Node and every descendant, with depth below `root`.
pub fn collect_subtree(world: &World, root: Entity) -> Vec<(Entity, u32)> {
    let mut members = vec![(root, 0)];
    let mut cursor = 0;
    while cursor < members.len() {
        let (node, depth) = members[cursor];
        if let Some(children) = world.get::<Children>(node) {
            members.extend(children.to_vec().into_iter().map(|child| (child, depth + 1)));
        }
        cursor += 1;
    }
    members
}

pub fn register_interactable(world: &mut World, entity: InteractableEntity) {
    if world.get_entity(entity.node).is_err() {
        warn!("Interactable '{}' skipped: node {} does not exist", entity.name, entity.node);
        return;
    }
    let members = collect_subtree(world, entity.node);
    let name = entity.name.clone();
    let member_count = members.len();
    let Some(mut targeting) = world.get_resource_mut::<InteractionTargeting>() else {
        return;
    };
    if targeting.register(entity, members) {
        debug!("Interactable '{}' registered with {} nodes", name, member_count);
    }
}

pub fn unregister_interactable(world: &mut World, node: Entity) {
    let Some(targeting) = world.get_resource::<InteractionTargeting>() else {
        return;
    };
    let hovered_name = targeting
        .hovered()
        .filter(|entity| entity.node == node)
        .map(|entity| entity.name.clone());

    if let Some(name) = hovered_name {
        world.trigger_targets(HoverEnded { name }, node);
    }
    if let Some(mut targeting) = world.get_resource_mut::<InteractionTargeting>() {
        targeting.unregister(node);
    }
}

/// Fire hover-end on the previous entity, hover-begin on the next, then store.
///
/// Transitions computed against a hover state that has since changed are
/// dropped.
pub fn apply_hover_transition(world: &mut World, transition: HoverTransition) {
    let Some(targeting) = world.get_resource::<InteractionTargeting>() else {
        return;
    };
    if targeting.hovered_node() != transition.previous {
        return;
    }
    let name_of = |node: Entity| targeting.get(node).map(|entity| entity.name.clone());
    let previous = transition.previous.and_then(|node| Some((node, name_of(node)?)));
    let next = transition.next.and_then(|node| Some((node, name_of(node)?)));

    if let Some((node, name)) = previous {
        debug!("Hover ended: {}", name);
        world.trigger_targets(HoverEnded { name }, node);
    }
    if let Some((node, name)) = next {
        debug!("Hover started: {}", name);
        world.trigger_targets(HoverStarted { name }, node);
    }
    if let Some(mut targeting) = world.get_resource_mut::<InteractionTargeting>() {
        targeting.set_hovered(transition.next);
    }
}

pub fn activate(world: &mut World, node: Entity) {
    let Some(name) = world
        .get_resource::<InteractionTargeting>()
        .and_then(|targeting| targeting.get(node))
        .map(|entity| entity.name.clone())
    else {
        return;
    };
    info!("Interacting with '{}'", name);
    world.trigger_targets(Interacted { name }, node);
}

/// Interaction registry access from systems.
pub trait InteractionCommands {
    fn register_interactable(&mut self, entity: InteractableEntity);
    fn unregister_interactable(&mut self, node: Entity);
}

impl InteractionCommands for Commands<'_, '_> {
    fn register_interactable(&mut self, entity: InteractableEntity) {
        self.queue(move |world: &mut World| register_interactable(world, entity));
    }

    fn unregister_interactable(&mut self, node: Entity) {
        self.queue(move |world: &mut World| unregister_interactable(world, node));
    }
}
