//! Interaction targeting.
//!
//! One ray is cast every time the pointer or camera moves, from the camera
//! along its forward axis (the viewport centre, not the free cursor). Hits are
//! walked nearest-first and mapped to registered entities through a
//! node → entity index that covers each entity's whole subtree. The first
//! entity whose own radius covers its hit distance becomes the target.
//!
//! Entities react through observers on their node:
//!
//! ```ignore
//! commands
//!     .entity(lantern)
//!     .observe(|_: Trigger<Interacted>, mut commands: Commands| {
//!         commands.play_animation("lantern-glow");
//!     });
//! commands.register_interactable(InteractableEntity::new(lantern, "Lantern"));
//! ```

/// Entity descriptor and the observer events fired on it.
pub mod entity;

/// Ray/oriented-box intersection.
pub mod ray;

/// The registry resource: index, resolution and hover state.
pub mod targeting;

/// World-level registration and event dispatch.
pub mod commands;

/// Hover and activation systems.
pub mod systems;

use bevy::prelude::*;
use constants::interaction::MAX_RAY_DISTANCE;
use serde::{Deserialize, Serialize};

pub use commands::InteractionCommands;
pub use entity::{HoverEnded, HoverStarted, InteractableEntity, Interacted};
pub use ray::RayHit;
pub use targeting::{HoverTransition, InteractionTargeting};

use crate::engine::ExplorerSet;
use systems::{handle_activation, update_hover};

#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    pub max_ray_distance: f32,
    pub activation_enabled: bool,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            max_ray_distance: MAX_RAY_DISTANCE,
            activation_enabled: true,
        }
    }
}

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionTargeting>()
            .init_resource::<InteractionSettings>()
            .add_event::<bevy::input::mouse::MouseMotion>()
            .init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_systems(
                Update,
                (update_hover, handle_activation)
                    .chain()
                    .in_set(ExplorerSet::Interact),
            );
    }
}
