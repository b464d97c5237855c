//! Frame pacing
//!
//! [`FrameLimiter`] backs `WindowSession::sync`. It sleeps for most of the
//! remaining frame time and yields for the last stretch, since OS sleeps
//! routinely overshoot by a millisecond or more.

use std::time::{Duration, Instant};

/// Sleep granularity we do not trust the OS to honour
const YIELD_WINDOW: Duration = Duration::from_millis(2);

/// Caps the frame rate of a loop that calls [`FrameLimiter::sync`] once per frame
#[derive(Debug)]
pub struct FrameLimiter {
    next_frame: Option<Instant>,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLimiter {
    /// Create a limiter with no frame scheduled yet
    pub const fn new() -> Self {
        Self { next_frame: None }
    }

    /// Block until the next frame slot for `fps` frames per second
    ///
    /// An `fps` of zero disables pacing. When the caller has fallen more than
    /// a full frame behind, the schedule restarts from now instead of trying
    /// to catch up with a burst of unpaced frames.
    pub fn sync(&mut self, fps: u32) {
        if fps == 0 {
            return;
        }

        let frame = Duration::from_secs(1) / fps;
        let now = Instant::now();
        let Some(target) = self.next_frame else {
            self.next_frame = Some(now + frame);
            return;
        };

        if let Some(remaining) = target.checked_duration_since(now) {
            if remaining > YIELD_WINDOW {
                std::thread::sleep(remaining - YIELD_WINDOW);
            }
            while Instant::now() < target {
                std::thread::yield_now();
            }
        }

        let now = Instant::now();
        self.next_frame = Some(if now > target + frame {
            now + frame
        } else {
            target + frame
        });
    }

    /// Forget the schedule; the next `sync` starts a fresh one
    pub fn reset(&mut self) {
        self.next_frame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_fps_never_blocks() {
        let mut limiter = FrameLimiter::new();
        let start = Instant::now();
        for _ in 0..100 {
            limiter.sync(0);
        }
        assert!(start.elapsed() < Duration::from_millis(50));
        assert!(limiter.next_frame.is_none());
    }

    #[test]
    fn test_caps_frame_rate() {
        let mut limiter = FrameLimiter::new();
        limiter.sync(100);

        let start = Instant::now();
        for _ in 0..5 {
            limiter.sync(100);
        }
        // Five 10ms frames, allow a little scheduling slack
        assert!(start.elapsed() >= Duration::from_millis(45));
    }

    #[test]
    fn test_falling_behind_restarts_schedule() {
        let mut limiter = FrameLimiter::new();
        limiter.sync(1000);
        std::thread::sleep(Duration::from_millis(20));

        let before = Instant::now();
        limiter.sync(1000);
        let target = limiter.next_frame.unwrap();
        assert!(target > before);
        assert!(target <= Instant::now() + Duration::from_millis(1));
    }

    #[test]
    fn test_reset_clears_schedule() {
        let mut limiter = FrameLimiter::new();
        limiter.sync(60);
        assert!(limiter.next_frame.is_some());
        limiter.reset();
        assert!(limiter.next_frame.is_none());
    }
}
