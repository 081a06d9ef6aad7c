//! Pure waveform functions shared by every animation kind.
//!
//! Progress is the position inside the current cycle, in `[0, 1)`.

use std::f32::consts::TAU;

/// Position inside the current cycle, or `None` for a degenerate duration.
pub fn cycle_progress(elapsed_secs: f32, duration_secs: f32) -> Option<f32> {
    if !(duration_secs > 0.0) || !duration_secs.is_finite() {
        return None;
    }
    let progress = elapsed_secs.max(0.0).rem_euclid(duration_secs) / duration_secs;
    // rem_euclid can round up to exactly the divisor.
    Some(if progress >= 1.0 { 0.0 } else { progress })
}

pub fn float_offset(progress: f32, amplitude: f32) -> f32 {
    amplitude * (TAU * progress).sin()
}

pub fn pulse_factor(progress: f32, amplitude: f32) -> f32 {
    1.0 + amplitude * (TAU * progress).sin()
}

pub fn glow_factor(progress: f32, amplitude: f32) -> f32 {
    amplitude * ((TAU * progress).sin() + 1.0) * 0.5
}

/// One parabolic arc per cycle: grounded at both ends, apex at the midpoint.
pub fn bounce_height(progress: f32, amplitude: f32) -> f32 {
    // A single arc; the two-arc `|sin|` form is zero at the midpoint.
    amplitude * 4.0 * progress * (1.0 - progress)
}

/// Accumulated spin; never wrapped.
pub fn rotation_angle(elapsed_secs: f32, speed: f32) -> f32 {
    elapsed_secs * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn progress_wraps_each_cycle() {
        assert_eq!(cycle_progress(0.0, 2.0), Some(0.0));
        assert!((cycle_progress(0.5, 2.0).unwrap() - 0.25).abs() < EPS);
        assert!((cycle_progress(5.0, 2.0).unwrap() - 0.5).abs() < EPS);
    }

    #[test]
    fn degenerate_duration_has_no_progress() {
        assert_eq!(cycle_progress(1.0, 0.0), None);
        assert_eq!(cycle_progress(1.0, -3.0), None);
        assert_eq!(cycle_progress(1.0, f32::NAN), None);
    }

    #[test]
    fn float_peaks_at_quarter_cycle() {
        assert!((float_offset(0.25, 2.0) - 2.0).abs() < EPS);
        assert!(float_offset(0.0, 2.0).abs() < EPS);
        assert!((float_offset(0.75, 2.0) + 2.0).abs() < EPS);
    }

    #[test]
    fn bounce_is_zero_at_ends_and_peaks_mid_cycle() {
        assert!(bounce_height(0.0, 1.0).abs() < EPS);
        assert!(bounce_height(0.9999, 1.0) < 1e-3);
        assert!((bounce_height(0.5, 1.0) - 1.0).abs() < EPS);
        assert!((bounce_height(0.25, 1.0) - bounce_height(0.75, 1.0)).abs() < EPS);
        assert!(bounce_height(0.25, 1.0) < 1.0);
    }

    #[test]
    fn glow_stays_within_zero_and_amplitude() {
        for step in 0..100 {
            let value = glow_factor(step as f32 / 100.0, 0.8);
            assert!((-EPS..=0.8 + EPS).contains(&value));
        }
        assert!((glow_factor(0.25, 0.8) - 0.8).abs() < EPS);
    }

    #[test]
    fn rotation_is_monotonic_without_wraparound() {
        assert!((rotation_angle(3.0, 2.0) - 6.0).abs() < EPS);
        let mut last = f32::MIN;
        for step in 0..1000 {
            let angle = rotation_angle(step as f32 * 0.1, 2.0);
            assert!(angle > last);
            last = angle;
        }
        assert!(last > std::f32::consts::TAU * 10.0);
    }
}
