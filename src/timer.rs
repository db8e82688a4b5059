use std::time::Duration;

// One run of the timer, from start to cancel. Ticks from older runs are dropped.
pub type Generation = u64;

#[derive(Debug, Default)]
pub struct AutoPlayTimer {
    generation: Generation,
    running: Option<Run>,
}

#[derive(Debug)]
struct Run {
    period: Duration,
    elapsed: Duration,
}

impl AutoPlayTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fresh run, replacing any run in progress.
    pub fn start(&mut self, period: Duration) -> Generation {
        self.cancel();
        self.generation += 1;
        self.running = Some(Run {
            // A zero period would fire forever within one advance.
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        });
        self.generation
    }

    pub fn cancel(&mut self) {
        if self.running.take().is_some() {
            // Invalidate ticks that may still be queued.
            self.generation += 1;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn period(&self) -> Option<Duration> {
        self.running.as_ref().map(|run| run.period)
    }

    /// Time left until the next fire.
    pub fn remaining(&self) -> Option<Duration> {
        self.running
            .as_ref()
            .map(|run| run.period.saturating_sub(run.elapsed))
    }

    /// Moves the clock forward and returns how many period boundaries were crossed.
    pub fn advance(&mut self, dt: Duration) -> u64 {
        let Some(run) = self.running.as_mut() else {
            return 0;
        };

        let elapsed = run.elapsed.saturating_add(dt).as_nanos();
        let period = run.period.as_nanos();
        // Remainder is below one period, which fits in u64 nanoseconds.
        run.elapsed = Duration::from_nanos((elapsed % period) as u64);
        u64::try_from(elapsed / period).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn idle_timer_never_fires() {
        let mut timer = AutoPlayTimer::new();
        assert_eq!(timer.advance(MINUTE * 10), 0);
        assert!(!timer.is_running());
    }

    #[test]
    fn fires_once_per_period() {
        let mut timer = AutoPlayTimer::new();
        timer.start(MINUTE);

        assert_eq!(timer.advance(Duration::from_secs(59)), 0);
        assert_eq!(timer.advance(Duration::from_secs(1)), 1);
        assert_eq!(timer.advance(Duration::from_secs(30)), 0);
        assert_eq!(timer.remaining(), Some(Duration::from_secs(30)));
        assert_eq!(timer.advance(MINUTE * 3), 3);
    }

    #[test]
    fn restart_resets_elapsed_time() {
        let mut timer = AutoPlayTimer::new();
        timer.start(MINUTE);
        timer.advance(Duration::from_secs(50));

        timer.start(MINUTE * 2);
        assert_eq!(timer.period(), Some(MINUTE * 2));
        assert_eq!(timer.advance(Duration::from_secs(100)), 0);
        assert_eq!(timer.advance(Duration::from_secs(20)), 1);
    }

    #[test]
    fn every_start_and_cancel_changes_generation() {
        let mut timer = AutoPlayTimer::new();
        let first = timer.start(MINUTE);
        timer.cancel();
        assert_ne!(timer.generation(), first);

        let second = timer.start(MINUTE);
        assert!(second > first);
        assert_eq!(timer.generation(), second);
    }

    #[test]
    fn huge_step_counts_periods_without_overflow() {
        let mut timer = AutoPlayTimer::new();
        timer.start(Duration::from_secs(30));
        timer.advance(Duration::from_secs(10));

        let fired = timer.advance(Duration::MAX);
        assert!(fired > 1_000_000);
        let remaining = timer.remaining().unwrap();
        assert!(remaining > Duration::ZERO && remaining <= Duration::from_secs(30));
    }

    #[test]
    fn cancelled_timer_stops_firing() {
        let mut timer = AutoPlayTimer::new();
        timer.start(MINUTE);
        timer.cancel();
        assert_eq!(timer.advance(MINUTE * 5), 0);
        assert_eq!(timer.remaining(), None);
    }
}
