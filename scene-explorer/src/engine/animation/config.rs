use constants::animation::{DEFAULT_AMPLITUDE, DEFAULT_DURATION_SECS, DEFAULT_SPEED};
use serde::{Deserialize, Serialize};

/// Procedural waveform driving one node attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationKind {
    /// Sinusoidal offset along the up axis.
    #[default]
    Float,
    /// Unbounded spin about the up axis.
    Rotate,
    /// Sinusoidal uniform scale.
    Pulse,
    /// Emissive intensity oscillation.
    Glow,
    /// Parabolic hop along the up axis.
    Bounce,
}

/// Parameters of one animation instance.
///
/// `looping` is recorded but never acted on: finished non-looping animations
/// keep cycling until their owner unregisters them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub kind: AnimationKind,
    pub duration_secs: f32,
    pub amplitude: f32,
    pub speed: f32,
    pub looping: bool,
    pub autostart: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            kind: AnimationKind::Float,
            duration_secs: DEFAULT_DURATION_SECS,
            amplitude: DEFAULT_AMPLITUDE,
            speed: DEFAULT_SPEED,
            looping: true,
            autostart: true,
        }
    }
}

impl AnimationConfig {
    pub fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_duration(mut self, secs: f32) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f32) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn once(mut self) -> Self {
        self.looping = false;
        self
    }

    /// Register without starting; a later `play` starts the cycle.
    pub fn paused(mut self) -> Self {
        self.autostart = false;
        self
    }
}
