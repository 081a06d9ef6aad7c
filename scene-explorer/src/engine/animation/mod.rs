//! Procedural animation engine.
//!
//! Animations are registered by id against a scene node and evaluated every
//! frame from the shared `Time` clock. No keyframes are stored: each instance
//! owns a snapshot of the node taken at registration and a waveform that maps
//! cycle progress to an offset from that snapshot.
//!
//! ## Lifecycle
//!
//! ```text
//! register_animation ──> baseline captured ──> active (autostart)
//!        │                                        │  ▲
//!        │                                 pause  │  │ play (cycle restarts)
//!        ▼                                        ▼  │
//! unregister_animation <────────────────────── paused
//!        └─> baseline written back onto the node
//! ```
//!
//! The tick system is gated on `AnimationRegistry::is_running`, which turns on
//! when the first instance becomes active and off when the last one stops.

/// Animation kinds and per-instance parameters.
pub mod config;

/// Baseline snapshots and per-instance evaluation.
pub mod instance;

/// The registry resource and its start/stop scheduler.
pub mod registry;

/// `Commands` extension that reads and restores node state.
pub mod commands;

/// Tick system and its run condition.
pub mod systems;

/// Waveform functions.
pub mod waveform;

use bevy::prelude::*;

pub use commands::AnimationCommands;
pub use config::{AnimationConfig, AnimationKind};
pub use instance::{AnimatedAttribute, AnimationInstance, NodeBaseline};
pub use registry::{AnimationRegistry, AnimationScheduler};

use crate::engine::ExplorerSet;
use systems::{animations_running, tick_animations};

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationRegistry>().add_systems(
            Update,
            tick_animations
                .run_if(animations_running)
                .in_set(ExplorerSet::Animate),
        );
    }
}
