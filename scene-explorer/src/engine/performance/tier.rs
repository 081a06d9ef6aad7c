use constants::quality::{
    HIGH_TIER_BUNDLE, LOW_TIER_BUNDLE, MEDIUM_TIER_BUNDLE, ShadowTechnique, TierBundle,
};
use serde::{Deserialize, Serialize};

/// Render quality class picked from recent frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    #[default]
    High,
    Medium,
    Low,
}

impl QualityTier {
    /// `high_fps` and `medium_fps` are inclusive lower bounds. A NaN sample
    /// falls back to high.
    pub fn classify(fps: f32, high_fps: f32, medium_fps: f32) -> Self {
        if fps.is_nan() || fps >= high_fps {
            Self::High
        } else if fps >= medium_fps {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn bundle(self) -> TierBundle {
        match self {
            Self::High => HIGH_TIER_BUNDLE,
            Self::Medium => MEDIUM_TIER_BUNDLE,
            Self::Low => LOW_TIER_BUNDLE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

pub fn shadow_filtering(technique: ShadowTechnique) -> bevy::pbr::ShadowFilteringMethod {
    use bevy::pbr::ShadowFilteringMethod;
    match technique {
        ShadowTechnique::Soft => ShadowFilteringMethod::Gaussian,
        ShadowTechnique::Filtered => ShadowFilteringMethod::Hardware2x2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::quality::{HIGH_TIER_MIN_FPS, MEDIUM_TIER_MIN_FPS};

    fn classify(fps: f32) -> QualityTier {
        QualityTier::classify(fps, HIGH_TIER_MIN_FPS, MEDIUM_TIER_MIN_FPS)
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(classify(45.0), QualityTier::Medium);
        assert_eq!(classify(50.0), QualityTier::High);
        assert_eq!(classify(49.99), QualityTier::Medium);
        assert_eq!(classify(30.0), QualityTier::Medium);
        assert_eq!(classify(29.0), QualityTier::Low);
        assert_eq!(classify(144.0), QualityTier::High);
    }

    #[test]
    fn nan_defaults_to_high() {
        assert_eq!(classify(f32::NAN), QualityTier::High);
    }

    #[test]
    fn cheaper_tiers_shrink_shadows() {
        let high = QualityTier::High.bundle();
        let low = QualityTier::Low.bundle();
        assert!(low.shadow_map_size < high.shadow_map_size);
        assert!(low.max_shadow_distance < high.max_shadow_distance);
        assert!(low.fog_enabled && !high.fog_enabled);
    }

    #[test]
    fn low_tier_saves_through_map_size_not_filtering() {
        let medium = QualityTier::Medium.bundle();
        let low = QualityTier::Low.bundle();
        assert_eq!(
            shadow_filtering(low.shadow_technique),
            shadow_filtering(medium.shadow_technique)
        );
        assert!(low.shadow_map_size < medium.shadow_map_size);
        assert!(low.max_shadow_distance < medium.max_shadow_distance);
        assert_ne!(
            shadow_filtering(QualityTier::High.bundle().shadow_technique),
            shadow_filtering(low.shadow_technique)
        );
    }
}
