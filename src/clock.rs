use std::thread;
use std::time::{Duration, Instant};

pub const FPS: u32 = 60;

/// Caps the frame loop at a fixed rate by sleeping out the rest of each
/// frame's budget.
pub struct FrameClock {
    budget: Duration,
    frame_start: Instant,
    frame: u64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
            frame: 0,
        }
    }

    /// Number of completed frames.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[cfg(test)]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Ends the current frame, sleeping if it finished early.
    pub fn tick(&mut self) {
        if let Some(rest) = remaining(self.budget, self.frame_start.elapsed()) {
            thread::sleep(rest);
        }
        self.frame_start = Instant::now();
        self.frame += 1;
    }
}

/// Time left in the budget, or `None` if the frame overran.
pub fn remaining(budget: Duration, elapsed: Duration) -> Option<Duration> {
    budget.checked_sub(elapsed).filter(|d| !d.is_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_budget() {
        let clock = FrameClock::new(FPS);
        assert_eq!(clock.budget(), Duration::from_nanos(16_666_666));
        assert_eq!(clock.frame(), 0);
    }

    #[test]
    fn remaining_time() {
        let budget = Duration::from_millis(16);
        assert_eq!(remaining(budget, Duration::from_millis(10)), Some(Duration::from_millis(6)));
        assert_eq!(remaining(budget, Duration::from_millis(16)), None);
        assert_eq!(remaining(budget, Duration::from_millis(40)), None);
    }

    #[test]
    fn tick_counts_frames_and_waits_out_the_budget() {
        let mut clock = FrameClock::new(200);
        let start = Instant::now();
        clock.tick();
        clock.tick();
        assert_eq!(clock.frame(), 2);
        assert!(start.elapsed() >= Duration::from_millis(9));
    }
}
