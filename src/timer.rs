//! Cancellable periodic deadline, polled from the frame loop

use std::time::{Duration, Instant};

/// Fires once per `period` after `start`.
///
/// Deadlines sit on a fixed grid (`start + k * period`), so a late poll
/// never shifts later firings. Dropping the timer cancels it.
#[derive(Debug)]
pub struct PeriodicTimer {
    period: Duration,
    next_deadline: Instant,
}

impl PeriodicTimer {
    pub fn start(now: Instant, period: Duration) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_deadline: now + period,
        }
    }

    /// Consume every deadline at or before `now`, returning how many fired
    pub fn fire_due(&mut self, now: Instant) -> u32 {
        let mut fired = 0;
        while now >= self.next_deadline {
            fired += 1;
            self.next_deadline += self.period;
        }
        fired
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(5000);

    #[test]
    fn test_nothing_due_before_first_period() {
        let t0 = Instant::now();
        let mut timer = PeriodicTimer::start(t0, PERIOD);
        assert_eq!(timer.fire_due(t0), 0);
        assert_eq!(timer.fire_due(t0 + Duration::from_millis(4999)), 0);
        assert_eq!(timer.next_deadline(), t0 + PERIOD);
    }

    #[test]
    fn test_fires_once_per_period() {
        let t0 = Instant::now();
        let mut timer = PeriodicTimer::start(t0, PERIOD);
        assert_eq!(timer.fire_due(t0 + PERIOD), 1);
        assert_eq!(timer.fire_due(t0 + PERIOD), 0);
        assert_eq!(timer.fire_due(t0 + PERIOD * 2), 1);
    }

    #[test]
    fn test_late_poll_catches_up_without_drift() {
        let t0 = Instant::now();
        let mut timer = PeriodicTimer::start(t0, PERIOD);

        // Three deadlines missed; the grid stays anchored at t0
        assert_eq!(timer.fire_due(t0 + PERIOD * 3 + Duration::from_millis(1000)), 3);
        assert_eq!(timer.next_deadline(), t0 + PERIOD * 4);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let t0 = Instant::now();
        let timer = PeriodicTimer::start(t0, Duration::ZERO);
        assert_eq!(timer.next_deadline(), t0 + Duration::from_millis(1));
    }
}
