use std::time::Instant;

use log::info;

/// Averages over one reporting interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Mean frame time in milliseconds
    pub average_frame_time: f32,
    pub frames_per_second: f32,
    pub frames: u32,
}

/// Accumulates frame times and produces a [`FrameReport`] once per interval.
#[derive(Debug, Clone)]
pub struct FrameStats {
    pub interval_ms: f32,
    elapsed_ms: f32,
    frames: u32,
}

impl FrameStats {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.,
            frames: 0,
        }
    }

    /// Add one frame. Returns a report and starts over once more than `interval_ms` has passed.
    pub fn record(&mut self, delta_ms: f32) -> Option<FrameReport> {
        self.elapsed_ms += delta_ms;
        self.frames += 1;

        if self.elapsed_ms <= self.interval_ms {
            return None;
        }

        let average_frame_time = self.elapsed_ms / self.frames as f32;
        let report = FrameReport {
            average_frame_time,
            frames_per_second: 1000. / average_frame_time,
            frames: self.frames,
        };
        self.elapsed_ms = 0.;
        self.frames = 0;
        Some(report)
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(1000.)
    }
}

/// Frame timing for the main loop.
#[derive(Debug, Clone)]
pub struct FrameContext {
    last_frame: Instant,
    pub stats: FrameStats,
}

impl FrameContext {
    pub fn new(stats: FrameStats) -> Self {
        Self {
            last_frame: Instant::now(),
            stats,
        }
    }

    /// Milliseconds since the previous call, or since this context was created
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        delta.as_secs_f32() * 1000.
    }

    /// Measure the frame that just finished and log the averages when an interval is up
    pub fn tick(&mut self) -> Option<FrameReport> {
        let delta = self.delta();
        let report = self.stats.record(delta)?;
        info!(
            "[ANDERS_PERF] Average frame time: {:.3}ms ({:.1} fps)",
            report.average_frame_time, report.frames_per_second
        );
        Some(report)
    }
}

impl Default for FrameContext {
    fn default() -> Self {
        Self::new(FrameStats::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    pub fn test_frame_stats_reports_once_per_interval() {
        let mut stats = FrameStats::new(100.);
        for _ in 0..10 {
            assert!(stats.record(10.).is_none());
        }

        let report = stats.record(10.).unwrap();
        assert_eq!(report.frames, 11);
        assert_relative_eq!(report.average_frame_time, 10.);
        assert_relative_eq!(report.frames_per_second, 100.);

        // Starts over after a report
        assert!(stats.record(50.).is_none());
        let report = stats.record(60.).unwrap();
        assert_eq!(report.frames, 2);
        assert_relative_eq!(report.average_frame_time, 55.);
    }

    #[test]
    pub fn test_delta_is_non_negative() {
        let mut frame_context = FrameContext::default();
        assert!(frame_context.delta() >= 0.);
        assert!(frame_context.delta() >= 0.);
    }
}
