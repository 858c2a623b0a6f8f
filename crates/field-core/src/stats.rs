use crate::constants::FRAME_REPORT_INTERVAL_SEC;
use crate::driver::FrameOutcome;
use std::time::Duration;

/// Summary of one reporting window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub frames_drawn: u32,
    pub frames_skipped: u32,
    pub avg_frame_ms: f32,
}

/// Rolling frame counters, reported once per interval.
#[derive(Clone, Debug)]
pub struct FrameStats {
    interval: Duration,
    elapsed: Duration,
    drawn: u32,
    skipped: u32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(Duration::from_secs_f32(FRAME_REPORT_INTERVAL_SEC))
    }
}

impl FrameStats {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            drawn: 0,
            skipped: 0,
        }
    }

    /// Count one frame that took `dt`. Inactive frames are ignored.
    pub fn record(&mut self, outcome: FrameOutcome, dt: Duration) -> Option<FrameReport> {
        match outcome {
            FrameOutcome::Drawn { .. } => self.drawn += 1,
            FrameOutcome::Skipped(_) => self.skipped += 1,
            FrameOutcome::Inactive => return None,
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return None;
        }
        let frames = self.drawn + self.skipped;
        let report = FrameReport {
            frames_drawn: self.drawn,
            frames_skipped: self.skipped,
            avg_frame_ms: self.elapsed.as_secs_f32() * 1000.0 / frames.max(1) as f32,
        };
        self.elapsed = Duration::ZERO;
        self.drawn = 0;
        self.skipped = 0;
        Some(report)
    }
}
