use bevy::prelude::*;
use constants::lod::{DEFAULT_LOD_FAR, DEFAULT_LOD_MEDIUM, DEFAULT_LOD_NEAR};
use serde::{Deserialize, Serialize};

use crate::engine::scene::SurfaceMaterial;

/// Distance band edges, in world units from the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LodConfig {
    pub near: f32,
    pub medium: f32,
    pub far: f32,
}

impl Default for LodConfig {
    fn default() -> Self {
        Self {
            near: DEFAULT_LOD_NEAR,
            medium: DEFAULT_LOD_MEDIUM,
            far: DEFAULT_LOD_FAR,
        }
    }
}

impl LodConfig {
    pub fn new(near: f32, medium: f32, far: f32) -> Self {
        Self { near, medium, far }
    }

    pub fn level(&self, distance: f32) -> LodLevel {
        if distance > self.far {
            LodLevel::Hidden
        } else if distance > self.medium {
            LodLevel::Reduced
        } else if distance > self.near {
            LodLevel::Medium
        } else {
            LodLevel::Near
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LodLevel {
    /// Inside `near`; full fidelity.
    Near,
    /// Between `near` and `medium`; full fidelity.
    Medium,
    /// Between `medium` and `far`; capped shininess, no shadow casting.
    Reduced,
    /// Beyond `far`.
    Hidden,
}

impl LodLevel {
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }
}

/// A node under distance-based fidelity control.
///
/// The baseline is the node's fidelity at registration and is independent of
/// any animation baseline on the same node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LodEntry {
    pub node: Entity,
    pub config: LodConfig,
    pub baseline_shininess: Option<f32>,
    pub baseline_casts_shadows: bool,
}

impl LodEntry {
    pub fn capture(
        node: Entity,
        config: LodConfig,
        material: Option<&SurfaceMaterial>,
        casts_shadows: bool,
    ) -> Self {
        Self {
            node,
            config,
            baseline_shininess: material.and_then(SurfaceMaterial::shininess),
            baseline_casts_shadows: casts_shadows,
        }
    }

    /// Shininess for this level, always derived from the baseline.
    pub fn shininess_at(&self, level: LodLevel, reduced_cap: f32) -> Option<f32> {
        let baseline = self.baseline_shininess?;
        Some(match level {
            LodLevel::Reduced => baseline.min(reduced_cap),
            _ => baseline,
        })
    }

    pub fn casts_shadows_at(&self, level: LodLevel) -> bool {
        match level {
            LodLevel::Reduced => false,
            _ => self.baseline_casts_shadows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_upper_inclusive() {
        let config = LodConfig::new(10.0, 20.0, 40.0);
        assert_eq!(config.level(5.0), LodLevel::Near);
        assert_eq!(config.level(10.0), LodLevel::Near);
        assert_eq!(config.level(15.0), LodLevel::Medium);
        assert_eq!(config.level(20.0), LodLevel::Medium);
        assert_eq!(config.level(20.5), LodLevel::Reduced);
        assert_eq!(config.level(40.0), LodLevel::Reduced);
        assert_eq!(config.level(40.1), LodLevel::Hidden);
    }

    #[test]
    fn reduced_fidelity_is_recomputed_from_baseline() {
        let material = SurfaceMaterial::phong(LinearRgba::BLACK, 60.0);
        let entry = LodEntry::capture(
            Entity::PLACEHOLDER,
            LodConfig::default(),
            Some(&material),
            true,
        );
        assert_eq!(entry.shininess_at(LodLevel::Reduced, 10.0), Some(10.0));
        assert_eq!(entry.shininess_at(LodLevel::Reduced, 10.0), Some(10.0));
        assert_eq!(entry.shininess_at(LodLevel::Near, 10.0), Some(60.0));
        assert!(!entry.casts_shadows_at(LodLevel::Reduced));
        assert!(entry.casts_shadows_at(LodLevel::Medium));
    }

    #[test]
    fn materials_without_shininess_are_left_alone() {
        let entry = LodEntry::capture(
            Entity::PLACEHOLDER,
            LodConfig::default(),
            Some(&SurfaceMaterial::Basic),
            false,
        );
        assert_eq!(entry.shininess_at(LodLevel::Reduced, 10.0), None);
        assert!(!entry.casts_shadows_at(LodLevel::Near));
    }
}
