use std::time::Duration;

use bevy::prelude::*;
use constants::lod::REDUCED_SHININESS;
use constants::quality::{
    FPS_SAMPLE_INTERVAL_MS, HIGH_TIER_MIN_FPS, MEDIUM_TIER_MIN_FPS, TierBundle,
};
use serde::{Deserialize, Serialize};

use super::lod::LodEntry;
use super::sampler::FrameSampler;
use super::tier::QualityTier;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernorOptions {
    /// When false the current tier is pinned; FPS is still sampled.
    pub adaptive: bool,
    pub sample_interval_ms: u64,
    pub high_fps: f32,
    pub medium_fps: f32,
    pub lod_enabled: bool,
    pub culling_enabled: bool,
    pub reduced_shininess: f32,
}

impl Default for GovernorOptions {
    fn default() -> Self {
        Self {
            adaptive: true,
            sample_interval_ms: FPS_SAMPLE_INTERVAL_MS,
            high_fps: HIGH_TIER_MIN_FPS,
            medium_fps: MEDIUM_TIER_MIN_FPS,
            lod_enabled: true,
            culling_enabled: true,
            reduced_shininess: REDUCED_SHININESS,
        }
    }
}

/// Partial update for `GovernorOptions`; unset fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernorOverrides {
    pub adaptive: Option<bool>,
    pub sample_interval_ms: Option<u64>,
    pub high_fps: Option<f32>,
    pub medium_fps: Option<f32>,
    pub lod_enabled: Option<bool>,
    pub culling_enabled: Option<bool>,
    pub reduced_shininess: Option<f32>,
}

impl GovernorOptions {
    pub fn apply(&mut self, overrides: &GovernorOverrides) {
        let GovernorOverrides {
            adaptive,
            sample_interval_ms,
            high_fps,
            medium_fps,
            lod_enabled,
            culling_enabled,
            reduced_shininess,
        } = *overrides;
        if let Some(value) = adaptive {
            self.adaptive = value;
        }
        if let Some(value) = sample_interval_ms {
            // A zero-length window would sample every frame.
            self.sample_interval_ms = value.max(1);
        }
        if let Some(value) = high_fps {
            self.high_fps = value;
        }
        if let Some(value) = medium_fps {
            self.medium_fps = value;
        }
        if let Some(value) = lod_enabled {
            self.lod_enabled = value;
        }
        if let Some(value) = culling_enabled {
            self.culling_enabled = value;
        }
        if let Some(value) = reduced_shininess {
            self.reduced_shininess = value;
        }
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.sample_interval_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GovernorStats {
    pub fps: f32,
    pub tier: QualityTier,
    pub lod_count: usize,
    pub visible_count: usize,
}

/// Frame-rate driven quality selection plus the LOD registry.
#[derive(Resource, Debug, Clone)]
pub struct PerformanceGovernor {
    options: GovernorOptions,
    sampler: FrameSampler,
    tier: QualityTier,
    applied: TierBundle,
    lod_entries: Vec<LodEntry>,
    fps: f32,
    visible_count: usize,
}

impl Default for PerformanceGovernor {
    fn default() -> Self {
        Self::new(GovernorOptions::default())
    }
}

impl PerformanceGovernor {
    pub fn new(options: GovernorOptions) -> Self {
        Self {
            options,
            sampler: FrameSampler::default(),
            tier: QualityTier::High,
            applied: QualityTier::High.bundle(),
            lod_entries: Vec::new(),
            fps: 0.0,
            visible_count: 0,
        }
    }

    pub fn options(&self) -> &GovernorOptions {
        &self.options
    }

    pub fn set_options(&mut self, overrides: &GovernorOverrides) {
        self.options.apply(overrides);
    }

    pub fn record_frame(&mut self) {
        self.sampler.record_frame();
    }

    /// Close the sampling window if it has run its course and reclassify.
    ///
    /// Returns the new tier when it changed.
    pub fn sample_and_classify(&mut self, now: Duration) -> Option<QualityTier> {
        let fps = self.sampler.sample(now, self.options.sample_interval())?;
        self.fps = fps;
        if !self.options.adaptive {
            return None;
        }
        let tier = QualityTier::classify(fps, self.options.high_fps, self.options.medium_fps);
        self.apply_tier(tier).then_some(tier)
    }

    /// Make `tier` current and apply its bundle. Returns false, with no state
    /// change, if it already was.
    pub fn apply_tier(&mut self, tier: QualityTier) -> bool {
        if self.tier == tier {
            return false;
        }
        self.tier = tier;
        self.applied = tier.bundle();
        true
    }

    pub fn tier(&self) -> QualityTier {
        self.tier
    }

    /// Render settings currently in force.
    pub fn applied_bundle(&self) -> &TierBundle {
        &self.applied
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Add or replace the LOD entry for a node.
    pub fn register_lod(&mut self, entry: LodEntry) {
        match self.lod_entries.iter_mut().find(|e| e.node == entry.node) {
            Some(existing) => *existing = entry,
            None => self.lod_entries.push(entry),
        }
    }

    pub fn unregister_lod(&mut self, node: Entity) -> Option<LodEntry> {
        let index = self.lod_entries.iter().position(|e| e.node == node)?;
        Some(self.lod_entries.remove(index))
    }

    pub fn lod_entries(&self) -> &[LodEntry] {
        &self.lod_entries
    }

    pub fn set_visible_count(&mut self, count: usize) {
        self.visible_count = count;
    }

    pub fn stats(&self) -> GovernorStats {
        GovernorStats {
            fps: self.fps,
            tier: self.tier,
            lod_count: self.lod_entries.len(),
            visible_count: self.visible_count,
        }
    }
}
