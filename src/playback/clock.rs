//! An asynchronous frame clock.

use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::{sleep, Instant};

/// Frames counted before the fps estimate is refreshed.
const FPS_WINDOW: u32 = 10;

/// Keeps frames apart by at least `1 / framerate` and tracks the achieved
/// frame rate.
#[derive(Debug, Clone)]
pub struct Clock {
    fps_tick: Option<Instant>,
    time_passed: Duration,
    raw_passed: Duration,
    last_tick: Instant,
    fps: f64,
    fps_count: u32,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            fps_tick: None,
            time_passed: Duration::ZERO,
            raw_passed: Duration::ZERO,
            last_tick: Instant::now(),
            fps: 0.0,
            fps_count: 0,
        }
    }

    /// Waits out the rest of the current frame and returns the time since
    /// the previous tick. A `framerate` of 0 sets no limit, but the tick
    /// still yields to the runtime so other tasks can progress.
    pub async fn tick(&mut self, framerate: u32) -> Duration {
        let frame = if framerate > 0 {
            Duration::from_secs(1) / framerate
        } else {
            Duration::ZERO
        };
        self.raw_passed = self.last_tick.elapsed();
        match frame.checked_sub(self.raw_passed).filter(|d| !d.is_zero()) {
            Some(delay) => sleep(delay).await,
            None => yield_now().await,
        }

        let now = Instant::now();
        self.time_passed = now - self.last_tick;
        self.last_tick = now;
        self.fps_count += 1;

        match self.fps_tick {
            None => {
                self.fps_count = 0;
                self.fps_tick = Some(now);
            }
            Some(start) if self.fps_count >= FPS_WINDOW => {
                let secs = (now - start).as_secs_f64();
                if secs > 0.0 {
                    self.fps = f64::from(self.fps_count) / secs;
                }
                self.fps_count = 0;
                self.fps_tick = Some(now);
            }
            Some(_) => {}
        }
        self.time_passed
    }

    /// Time between the last two ticks, including the wait.
    #[must_use]
    pub const fn time(&self) -> Duration {
        self.time_passed
    }

    /// Time spent between the last two ticks before waiting.
    #[must_use]
    pub const fn raw_time(&self) -> Duration {
        self.raw_passed
    }

    #[must_use]
    pub const fn fps(&self) -> f64 {
        self.fps
    }
}
