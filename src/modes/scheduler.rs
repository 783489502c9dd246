use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior, interval};

/// Fixed-rate timer driving the simulation
///
/// A late beat pushes the following ones back instead of firing a burst, so
/// two ticks never run back to back to catch up.
pub struct TickScheduler {
    timer: Interval,
    period: Duration,
}

impl TickScheduler {
    pub fn new(period: Duration) -> Self {
        let mut timer = interval(period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self { timer, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Wait for the next beat; the first one completes immediately
    pub async fn next_beat(&mut self) {
        self.timer.tick().await;
    }

    /// Restart the cadence from now
    pub fn reset(&mut self) {
        self.timer.reset();
    }
}
