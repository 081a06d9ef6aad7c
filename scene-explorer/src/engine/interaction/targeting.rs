use std::collections::HashMap;

use bevy::prelude::*;

use super::entity::InteractableEntity;
use super::ray::RayHit;

/// Change of hovered entity, identified by node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverTransition {
    pub previous: Option<Entity>,
    pub next: Option<Entity>,
}

#[derive(Debug, Clone)]
struct Registered {
    entity: InteractableEntity,
    /// The entity node and its descendants, with depth below the entity node.
    members: Vec<(Entity, u32)>,
}

/// Registry of interactable entities and the current hover state.
///
/// `index` maps every member node to the nearest registered ancestor, so a ray
/// hit on any child mesh resolves with one lookup.
#[derive(Resource, Debug, Default)]
pub struct InteractionTargeting {
    entities: Vec<Registered>,
    index: HashMap<Entity, Entity>,
    hovered: Option<Entity>,
}

impl InteractionTargeting {
    /// Add an entity. `members` lists its node subtree with depths; the node
    /// itself is always included.
    ///
    /// Returns false when another node already uses the name.
    pub fn register(&mut self, entity: InteractableEntity, members: Vec<(Entity, u32)>) -> bool {
        if self
            .entities
            .iter()
            .any(|r| r.entity.name == entity.name && r.entity.node != entity.node)
        {
            warn!("Interactable name '{}' is already registered", entity.name);
            return false;
        }

        let mut members = members;
        if !members.iter().any(|(node, _)| *node == entity.node) {
            members.push((entity.node, 0));
        }

        let registered = Registered { entity, members };
        match self
            .entities
            .iter()
            .position(|r| r.entity.node == registered.entity.node)
        {
            Some(index) => self.entities[index] = registered,
            None => self.entities.push(registered),
        }
        self.rebuild_index();
        true
    }

    /// Remove the entity registered on `node`, clearing hover if it was hovered.
    pub fn unregister(&mut self, node: Entity) -> Option<InteractableEntity> {
        let index = self.entities.iter().position(|r| r.entity.node == node)?;
        let removed = self.entities.remove(index);
        if self.hovered == Some(node) {
            self.hovered = None;
        }
        self.rebuild_index();
        Some(removed.entity)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&InteractableEntity> {
        self.list_entities().find(|entity| entity.name == name)
    }

    pub fn get(&self, node: Entity) -> Option<&InteractableEntity> {
        self.list_entities().find(|entity| entity.node == node)
    }

    /// Entities in registration order.
    pub fn list_entities(&self) -> impl Iterator<Item = &InteractableEntity> {
        self.entities.iter().map(|r| &r.entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Registered entity owning a scene node, if any.
    pub fn owner_of(&self, node: Entity) -> Option<&InteractableEntity> {
        self.index.get(&node).and_then(|owner| self.get(*owner))
    }

    pub fn hovered_node(&self) -> Option<Entity> {
        self.hovered
    }

    pub fn hovered(&self) -> Option<&InteractableEntity> {
        self.hovered.and_then(|node| self.get(node))
    }

    /// First hit, nearest-first, that maps to an entity within that entity's
    /// own radius. Out-of-range hits do not stop the search.
    pub fn resolve_target(&self, hits: &[RayHit]) -> Option<Entity> {
        hits.iter().find_map(|hit| {
            let entity = self.owner_of(hit.node)?;
            entity.in_range(hit.distance).then_some(entity.node)
        })
    }

    /// The transition needed to hover `target`, or `None` if it already is.
    pub fn hover_transition(&self, target: Option<Entity>) -> Option<HoverTransition> {
        (self.hovered != target).then_some(HoverTransition {
            previous: self.hovered,
            next: target,
        })
    }

    pub fn set_hovered(&mut self, node: Option<Entity>) {
        self.hovered = node.filter(|node| self.get(*node).is_some());
    }

    fn rebuild_index(&mut self) {
        let mut depths: HashMap<Entity, u32> = HashMap::new();
        self.index.clear();
        for registered in &self.entities {
            for &(member, depth) in &registered.members {
                let closer = depths.get(&member).is_none_or(|best| depth < *best);
                if closer {
                    depths.insert(member, depth);
                    self.index.insert(member, registered.entity.node);
                }
            }
        }
    }
}
