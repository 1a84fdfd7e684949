//! Fixed frame-rate limiter for the main loop.

use std::thread;
use std::time::{Duration, Instant};

pub struct FrameClock {
    frame: Option<Duration>,
    last: Instant,
}

impl FrameClock {
    /// `fps` of 0 never waits
    pub fn new(fps: u32) -> Self {
        let frame = (fps > 0).then(|| Duration::from_secs(1) / fps);
        Self {
            frame,
            last: Instant::now(),
        }
    }

    pub fn frame_duration(&self) -> Option<Duration> {
        self.frame
    }

    /// Blocks until a full frame has passed since the previous call
    pub fn wait(&mut self) {
        if let Some(frame) = self.frame {
            let elapsed = self.last.elapsed();
            if elapsed < frame {
                thread::sleep(frame - elapsed);
            }
        }
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uncapped_clock_does_not_sleep() {
        let mut clock = FrameClock::new(0);
        assert!(clock.frame_duration().is_none());
        let start = Instant::now();
        for _ in 0..100 {
            clock.wait();
        }
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_capped_clock_spaces_frames() {
        let mut clock = FrameClock::new(100);
        assert_eq!(clock.frame_duration(), Some(Duration::from_millis(10)));
        clock.wait();
        let start = Instant::now();
        clock.wait();
        clock.wait();
        assert!(start.elapsed() >= Duration::from_millis(18));
    }
}
