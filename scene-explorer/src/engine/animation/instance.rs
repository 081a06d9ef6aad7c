use std::time::Duration;

use bevy::prelude::*;

use super::config::{AnimationConfig, AnimationKind};
use super::waveform::{
    bounce_height, cycle_progress, float_offset, glow_factor, pulse_factor, rotation_angle,
};
use crate::engine::scene::SurfaceMaterial;

/// Node state captured when an animation is registered.
///
/// Every waveform is an offset from this snapshot, and unregistering writes
/// it back verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeBaseline {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    /// `None` when the material cannot glow.
    pub emissive: Option<LinearRgba>,
}

impl NodeBaseline {
    pub fn capture(transform: &Transform, material: Option<&SurfaceMaterial>) -> Self {
        Self {
            translation: transform.translation,
            rotation: transform.rotation,
            scale: transform.scale,
            emissive: material.and_then(SurfaceMaterial::emissive),
        }
    }

    /// Write the snapshot back onto a node.
    pub fn restore(&self, transform: &mut Transform, material: Option<&mut SurfaceMaterial>) {
        transform.translation = self.translation;
        transform.rotation = self.rotation;
        transform.scale = self.scale;
        if let (Some(emissive), Some(material)) = (self.emissive, material) {
            material.set_emissive(emissive);
        }
    }
}

/// The one attribute an animation writes on a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatedAttribute {
    Translation(Vec3),
    Rotation(Quat),
    Scale(Vec3),
    Emissive(LinearRgba),
}

impl AnimatedAttribute {
    pub fn apply(self, transform: &mut Transform, material: Option<&mut SurfaceMaterial>) {
        match self {
            Self::Translation(translation) => transform.translation = translation,
            Self::Rotation(rotation) => transform.rotation = rotation,
            Self::Scale(scale) => transform.scale = scale,
            Self::Emissive(colour) => {
                if let Some(material) = material {
                    material.set_emissive(colour);
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimationInstance {
    pub id: String,
    pub node: Entity,
    pub config: AnimationConfig,
    pub phase_start: Duration,
    pub active: bool,
    baseline: NodeBaseline,
}

impl AnimationInstance {
    pub fn new(
        id: String,
        node: Entity,
        config: AnimationConfig,
        baseline: NodeBaseline,
        now: Duration,
    ) -> Self {
        Self {
            id,
            node,
            config,
            phase_start: now,
            active: config.autostart,
            baseline,
        }
    }

    pub fn kind(&self) -> AnimationKind {
        self.config.kind
    }

    pub fn baseline(&self) -> &NodeBaseline {
        &self.baseline
    }

    /// Seconds since the current cycle started.
    pub fn elapsed_secs(&self, now: Duration) -> f32 {
        now.saturating_sub(self.phase_start).as_secs_f32()
    }

    /// Attribute value for `now`, or `None` when this frame is a no-op.
    pub fn evaluate(&self, now: Duration) -> Option<AnimatedAttribute> {
        let elapsed = self.elapsed_secs(now);
        let AnimationConfig {
            kind,
            duration_secs,
            amplitude,
            speed,
            ..
        } = self.config;
        let base = &self.baseline;

        let progress = || cycle_progress(elapsed, duration_secs);
        let attribute = match kind {
            // Spin is driven by speed alone, so a degenerate duration does not gate it.
            AnimationKind::Rotate => AnimatedAttribute::Rotation(
                Quat::from_rotation_y(rotation_angle(elapsed, speed)) * base.rotation,
            ),
            AnimationKind::Float => AnimatedAttribute::Translation(
                base.translation + Vec3::Y * float_offset(progress()?, amplitude),
            ),
            AnimationKind::Pulse => {
                AnimatedAttribute::Scale(base.scale * pulse_factor(progress()?, amplitude))
            }
            AnimationKind::Glow => {
                let emissive = base.emissive?;
                let factor = glow_factor(progress()?, amplitude);
                AnimatedAttribute::Emissive(LinearRgba::new(
                    emissive.red * factor,
                    emissive.green * factor,
                    emissive.blue * factor,
                    emissive.alpha,
                ))
            }
            AnimationKind::Bounce => AnimatedAttribute::Translation(
                base.translation + Vec3::Y * bounce_height(progress()?, amplitude),
            ),
        };
        Some(attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(config: AnimationConfig, transform: Transform) -> AnimationInstance {
        AnimationInstance::new(
            "test".into(),
            Entity::PLACEHOLDER,
            config,
            NodeBaseline::capture(&transform, None),
            Duration::ZERO,
        )
    }

    #[test]
    fn float_quarter_cycle_lifts_by_amplitude() {
        let anim = instance(
            AnimationConfig::new(AnimationKind::Float)
                .with_amplitude(2.0)
                .with_duration(4.0),
            Transform::from_xyz(0.0, 5.0, 0.0),
        );
        let Some(AnimatedAttribute::Translation(at)) = anim.evaluate(Duration::from_secs(1))
        else {
            panic!("float should move translation");
        };
        assert!((at.y - 7.0).abs() < 1e-5);
    }

    #[test]
    fn rotate_ignores_zero_duration() {
        let anim = instance(
            AnimationConfig::new(AnimationKind::Rotate)
                .with_speed(2.0)
                .with_duration(0.0),
            Transform::default(),
        );
        let Some(AnimatedAttribute::Rotation(rotation)) = anim.evaluate(Duration::from_secs(3))
        else {
            panic!("rotate should run without a duration");
        };
        let expected = Quat::from_rotation_y(6.0);
        assert!(rotation.angle_between(expected) < 1e-4);
    }

    #[test]
    fn zero_duration_skips_cyclic_kinds() {
        let anim = instance(
            AnimationConfig::new(AnimationKind::Pulse).with_duration(0.0),
            Transform::default(),
        );
        assert_eq!(anim.evaluate(Duration::from_secs(1)), None);
    }

    #[test]
    fn glow_without_emissive_is_noop() {
        let anim = instance(AnimationConfig::new(AnimationKind::Glow), Transform::default());
        assert_eq!(anim.evaluate(Duration::from_millis(500)), None);
    }

    #[test]
    fn glow_scales_baseline_emissive() {
        let material = SurfaceMaterial::phong(LinearRgba::rgb(1.0, 0.5, 0.0), 20.0);
        let anim = AnimationInstance::new(
            "glow".into(),
            Entity::PLACEHOLDER,
            AnimationConfig::new(AnimationKind::Glow)
                .with_amplitude(1.0)
                .with_duration(4.0),
            NodeBaseline::capture(&Transform::default(), Some(&material)),
            Duration::ZERO,
        );
        let Some(AnimatedAttribute::Emissive(colour)) = anim.evaluate(Duration::from_secs(1))
        else {
            panic!("glow should write emissive");
        };
        assert!((colour.red - 1.0).abs() < 1e-5);
        assert!((colour.green - 0.5).abs() < 1e-5);
    }

    #[test]
    fn pulse_scales_from_baseline() {
        let anim = instance(
            AnimationConfig::new(AnimationKind::Pulse)
                .with_amplitude(0.5)
                .with_duration(4.0),
            Transform::from_scale(Vec3::splat(2.0)),
        );
        let Some(AnimatedAttribute::Scale(scale)) = anim.evaluate(Duration::from_secs(1)) else {
            panic!("pulse should write scale");
        };
        assert!((scale - Vec3::splat(3.0)).length() < 1e-5);
    }
}
