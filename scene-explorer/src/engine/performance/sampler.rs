use std::time::Duration;

/// Frame counter over fixed sampling windows.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameSampler {
    frames: u32,
    window_start: Duration,
}

impl FrameSampler {
    pub fn starting_at(now: Duration) -> Self {
        Self {
            frames: 0,
            window_start: now,
        }
    }

    pub fn record_frame(&mut self) {
        self.frames = self.frames.saturating_add(1);
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Average FPS over the window once `interval` has elapsed, then a fresh
    /// window starts at `now`.
    pub fn sample(&mut self, now: Duration, interval: Duration) -> Option<f32> {
        let elapsed = now.saturating_sub(self.window_start);
        if elapsed.is_zero() || elapsed < interval {
            return None;
        }
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        let fps = (f64::from(self.frames) * 1000.0 / elapsed_ms) as f32;
        *self = Self::starting_at(now);
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn no_sample_before_window_closes() {
        let mut sampler = FrameSampler::default();
        sampler.record_frame();
        assert_eq!(sampler.sample(Duration::from_millis(999), SECOND), None);
        assert_eq!(sampler.frames(), 1);
    }

    #[test]
    fn averages_over_elapsed_time_and_resets() {
        let mut sampler = FrameSampler::default();
        for _ in 0..90 {
            sampler.record_frame();
        }
        let fps = sampler.sample(Duration::from_millis(2000), SECOND).unwrap();
        assert!((fps - 45.0).abs() < 1e-3);
        assert_eq!(sampler.frames(), 0);
        assert_eq!(sampler.sample(Duration::from_millis(2500), SECOND), None);
    }
}
