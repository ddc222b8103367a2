/// Minimum-interval throttle for simulation ticks.
///
/// A tick is due once at least `1 / ticks_per_second` seconds have passed
/// since the last admitted tick. Time between frames is not accumulated,
/// so a slow frame never produces a burst of catch-up ticks.
#[derive(Clone, Copy, Debug)]
pub struct TickThrottle {
    min_interval: f64,
    last_tick: f64,
}

impl TickThrottle {
    pub fn new(ticks_per_second: f64) -> Self {
        Self {
            min_interval: 1.0 / ticks_per_second,
            last_tick: 0.0,
        }
    }

    pub fn min_interval(&self) -> f64 {
        self.min_interval
    }

    /// Returns true and records `now` as the last tick when a tick is due
    pub fn is_due(&mut self, now: f64) -> bool {
        if now - self.last_tick >= self.min_interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}
