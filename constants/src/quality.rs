use serde::{Deserialize, Serialize};

/// Average FPS at or above which the governor selects the high tier.
pub const HIGH_TIER_MIN_FPS: f32 = 50.0;

/// Average FPS at or above which the governor selects the medium tier.
pub const MEDIUM_TIER_MIN_FPS: f32 = 30.0;

/// Length of one frame-rate sampling window in milliseconds.
pub const FPS_SAMPLE_INTERVAL_MS: u64 = 1000;

/// Shadow filtering quality, ordered from most to least expensive.
///
/// Bevy has nothing cheaper than hardware 2x2 PCF, so the low tier shares
/// `Filtered` with the medium tier and saves through map size and distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowTechnique {
    /// Soft, multi-tap filtered shadows.
    Soft,
    /// Hardware 2x2 percentage-closer filtering.
    Filtered,
}

/// Render settings applied as one unit when a quality tier becomes current.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBundle {
    pub shadow_technique: ShadowTechnique,
    pub shadow_map_size: usize,
    pub max_shadow_distance: f32,
    pub fog_enabled: bool,
    pub fog_start: f32,
    pub fog_end: f32,
}

pub const HIGH_TIER_BUNDLE: TierBundle = TierBundle {
    shadow_technique: ShadowTechnique::Soft,
    shadow_map_size: 2048,
    max_shadow_distance: 120.0,
    fog_enabled: false,
    fog_start: 0.0,
    fog_end: 0.0,
};

pub const MEDIUM_TIER_BUNDLE: TierBundle = TierBundle {
    shadow_technique: ShadowTechnique::Filtered,
    shadow_map_size: 1024,
    max_shadow_distance: 60.0,
    fog_enabled: true,
    fog_start: 40.0,
    fog_end: 140.0,
};

pub const LOW_TIER_BUNDLE: TierBundle = TierBundle {
    shadow_technique: ShadowTechnique::Filtered,
    shadow_map_size: 512,
    max_shadow_distance: 30.0,
    fog_enabled: true,
    fog_start: 15.0,
    fog_end: 70.0,
};
