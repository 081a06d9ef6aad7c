//! Adaptive performance governor.
//!
//! Two loops share the `PerformanceGovernor` resource:
//!
//! - **Sampling** (`Update`): frames are counted over a fixed window
//!   (1000 ms by default). When the window closes, the average FPS is
//!   classified into a `QualityTier` and, if the tier changed, its
//!   `TierBundle` replaces the current render settings: shadow filtering,
//!   shadow-map size, cascade distance and distance fog.
//! - **Per-frame pass** (`PostUpdate`): after transforms have propagated and
//!   before Bevy computes visibility, every LOD-managed node gets a distance
//!   band from the camera, then every node with a `BoundingSphere` has its
//!   visibility overridden by the frustum test.
//!
//! Shininess and shadow casting are always recomputed from the fidelity
//! captured at `register_lod`, never from the previous frame.

pub mod commands;
pub mod culling;
pub mod governor;
pub mod lod;
pub mod sampler;
pub mod systems;
pub mod tier;

use bevy::prelude::*;
use bevy::render::view::VisibilitySystems;
use bevy::transform::TransformSystem;

pub use commands::LodCommands;
pub use governor::{GovernorOptions, GovernorOverrides, GovernorStats, PerformanceGovernor};
pub use lod::{LodConfig, LodEntry, LodLevel};
pub use tier::QualityTier;

use crate::engine::ExplorerSet;
use crate::engine::scene::bounds::compute_bounding_spheres;
use systems::{apply_quality_settings, sample_frame_rate, update_lod_and_culling};

pub struct PerformancePlugin;

impl Plugin for PerformancePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PerformanceGovernor>()
            .add_systems(
                Update,
                (sample_frame_rate, apply_quality_settings)
                    .chain()
                    .in_set(ExplorerSet::Govern),
            )
            .add_systems(
                PostUpdate,
                update_lod_and_culling
                    .after(TransformSystem::TransformPropagate)
                    .after(compute_bounding_spheres)
                    .before(VisibilitySystems::VisibilityPropagate),
            );
    }
}
