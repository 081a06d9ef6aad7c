/// Cycle length used when an animation config leaves it unset.
pub const DEFAULT_DURATION_SECS: f32 = 2.0;

/// Waveform amplitude used when an animation config leaves it unset.
pub const DEFAULT_AMPLITUDE: f32 = 0.5;

/// Radians per second for rotate animations when unset.
pub const DEFAULT_SPEED: f32 = 1.0;
