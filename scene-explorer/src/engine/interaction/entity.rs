use bevy::prelude::*;
use constants::interaction::DEFAULT_INTERACTION_RADIUS;
use serde::{Deserialize, Serialize};

/// A named, targetable object in the scene.
///
/// `node` is a back-reference only: despawning the node is the scene's job,
/// unregistering is the caller's. Callbacks are ordinary Bevy observers on the
/// node for `Interacted`, `HoverStarted` and `HoverEnded`.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractableEntity {
    pub node: Entity,
    pub name: String,
    pub description: String,
    pub radius: f32,
}

impl InteractableEntity {
    pub fn new(node: Entity, name: impl Into<String>) -> Self {
        Self {
            node,
            name: name.into(),
            description: String::new(),
            radius: DEFAULT_INTERACTION_RADIUS,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn in_range(&self, distance: f32) -> bool {
        distance <= self.radius
    }
}

/// Fired on an entity's node when the view ray starts targeting it.
#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverStarted {
    pub name: String,
}

/// Fired on an entity's node when the view ray stops targeting it.
#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoverEnded {
    pub name: String,
}

/// Fired on an entity's node when the player activates it.
#[derive(Event, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interacted {
    pub name: String,
}
