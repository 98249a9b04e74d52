use std::collections::VecDeque;
use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Rolling frame-rate measurement over the last second of samples
#[derive(Debug, Clone, Default)]
pub struct FrameRateMeter {
    samples: VecDeque<Instant>,
}

impl FrameRateMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// Record one frame at `now` and drop samples older than the window
    pub fn record(&mut self, now: Instant) {
        self.samples.push_back(now);
        while let Some(&oldest) = self.samples.front() {
            if now.saturating_duration_since(oldest) > WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }

    /// Frames recorded during the last second
    pub fn rate(&self) -> usize {
        self.samples.len()
    }

    /// Mean spacing between recorded frames, if at least two were recorded
    pub fn frame_time(&self) -> Option<Duration> {
        let first = self.samples.front()?;
        let last = self.samples.back()?;
        let gaps = self.samples.len().checked_sub(1).filter(|&n| n > 0)?;
        Some(last.saturating_duration_since(*first) / gaps as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_samples_in_window() {
        let start = Instant::now();
        let mut meter = FrameRateMeter::new();
        for i in 0..30 {
            meter.record(start + Duration::from_millis(i * 10));
        }
        assert_eq!(meter.rate(), 30);
        assert_eq!(meter.frame_time(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn test_drops_samples_older_than_a_second() {
        let start = Instant::now();
        let mut meter = FrameRateMeter::new();
        meter.record(start);
        meter.record(start + Duration::from_millis(500));
        meter.record(start + Duration::from_millis(1600));
        assert_eq!(meter.rate(), 1);
    }

    #[test]
    fn test_single_sample_has_no_frame_time() {
        let mut meter = FrameRateMeter::new();
        assert_eq!(meter.frame_time(), None);
        meter.record(Instant::now());
        assert_eq!(meter.frame_time(), None);
        meter.reset();
        assert_eq!(meter.rate(), 0);
    }
}
