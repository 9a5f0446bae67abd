//! Frame pacing for the native loop

use std::thread;
use std::time::{Duration, Instant};

/// Sleep-based limiter holding the loop to a fixed frame rate
///
/// Deadlines advance by exactly one frame so short oversleeps even out. If
/// the loop falls more than a frame behind (debugger, suspended process) the
/// schedule restarts from now instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame: Duration,
    next: Instant,
}

impl FrameLimiter {
    pub fn new(hz: u32) -> Self {
        let frame = Duration::from_secs_f64(1.0 / f64::from(hz.max(1)));
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the current frame's deadline; returns the time slept
    pub fn wait(&mut self) -> Duration {
        let now = Instant::now();
        if now < self.next {
            let slept = self.next - now;
            thread::sleep(slept);
            self.next += self.frame;
            slept
        } else {
            if now - self.next > self.frame {
                log::debug!("Frame limiter behind by {:?}, resyncing", now - self.next);
                self.next = now + self.frame;
            } else {
                self.next += self.frame;
            }
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        let limiter = FrameLimiter::new(60);
        let micros = limiter.frame_duration().as_micros();
        assert!((16_600..=16_700).contains(&micros));
    }

    #[test]
    fn test_zero_hz_is_clamped() {
        assert_eq!(FrameLimiter::new(0).frame_duration(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_paces_frames() {
        let mut limiter = FrameLimiter::new(200);
        let start = Instant::now();
        for _ in 0..4 {
            limiter.wait();
        }
        // Four 5 ms frames
        assert!(start.elapsed() >= Duration::from_millis(19));
    }

    #[test]
    fn test_resync_after_stall() {
        let mut limiter = FrameLimiter::new(1000);
        thread::sleep(Duration::from_millis(20));
        let resumed = Instant::now();
        assert_eq!(limiter.wait(), Duration::ZERO);
        // Schedule restarted, not 20 frames in arrears
        assert!(limiter.next > resumed);
    }
}
