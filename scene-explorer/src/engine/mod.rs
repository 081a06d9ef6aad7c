//! Scene explorer engine.
//!
//! The three core subsystems (animation, interaction targeting and the
//! performance governor) are plain Bevy plugins sharing one ordering contract,
//! expressed by `ExplorerSet`. Everything else in here is host driver: camera,
//! configuration, HUD and the demo scene.

pub mod animation;
pub mod camera;
pub mod config;
pub mod core;
pub mod demo;
pub mod interaction;
pub mod performance;
pub mod scene;
pub mod systems;

use bevy::prelude::*;

use animation::AnimationPlugin;
use interaction::InteractionPlugin;
use performance::PerformancePlugin;
use scene::SceneNodePlugin;

/// Per-frame ordering of the core subsystems within `Update`.
///
/// Animations move nodes first so the hover ray sees this frame's geometry.
/// The governor's LOD and culling pass runs later still, in `PostUpdate`, once
/// transforms have propagated.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExplorerSet {
    Animate,
    Interact,
    Govern,
}

/// Animation, interaction and performance subsystems plus the node
/// attribute systems they rely on. Needs no rendering plugins, so it also
/// runs in headless apps.
pub struct ExplorerCorePlugin;

impl Plugin for ExplorerCorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                ExplorerSet::Animate,
                ExplorerSet::Interact,
                ExplorerSet::Govern,
            )
                .chain(),
        )
        .add_plugins((
            SceneNodePlugin,
            AnimationPlugin,
            InteractionPlugin,
            PerformancePlugin,
        ));
    }
}
