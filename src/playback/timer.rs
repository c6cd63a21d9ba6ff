//! Remaps frame ticks into named events that fire at fixed intervals.

use crate::playback::error::TimerError;
use std::time::Duration;

/// Name of the event every frame produces. It cannot be remapped.
pub const TICK: &str = "tick";

#[derive(Debug, Clone, PartialEq, Eq)]
struct TimedEvent {
    name: String,
    interval: Duration,
    elapsed: Duration,
}

/// Accumulates tick time per event and reports how often each one fired.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    events: Vec<TimedEvent>,
}

impl Timer {
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Fires `name` every `interval` of tick time. The event fires on the
    /// first tick after it is added. Adding an existing name replaces it.
    ///
    /// # Errors
    ///
    /// `TimerError::SelfRemap` for the tick event itself, `ZeroInterval` for
    /// an empty interval.
    pub fn add_event(&mut self, name: &str, interval: Duration) -> Result<(), TimerError> {
        if name == TICK {
            return Err(TimerError::SelfRemap(name.to_string()));
        }
        if interval.is_zero() {
            return Err(TimerError::ZeroInterval(name.to_string()));
        }
        self.remove_event(name);
        self.events.push(TimedEvent {
            name: name.to_string(),
            interval,
            elapsed: interval,
        });
        Ok(())
    }

    /// Stops firing `name`; unknown names are ignored.
    pub fn remove_event(&mut self, name: &str) {
        self.events.retain(|e| e.name != name);
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.events.iter().any(|e| e.name == name)
    }

    /// Adds `elapsed` to every event and returns those that fired, with
    /// how many whole intervals passed. Leftover time carries over.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<(String, u32)> {
        let mut fired = Vec::new();
        for event in &mut self.events {
            let passed = event.elapsed + elapsed;
            let interval = event.interval.as_nanos();
            let count = passed.as_nanos() / interval;
            if count == 0 {
                event.elapsed = passed;
                continue;
            }
            let rest = passed.as_nanos() % interval;
            // remainder is below `interval`, which came from a Duration
            event.elapsed = Duration::from_nanos(u64::try_from(rest).unwrap_or(u64::MAX));
            fired.push((event.name.clone(), u32::try_from(count).unwrap_or(u32::MAX)));
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: &str = "next_step";

    #[test]
    fn test_first_tick_fires() {
        let mut timer = Timer::new();
        timer.add_event(STEP, Duration::from_millis(400)).unwrap();
        assert_eq!(timer.tick(Duration::ZERO), vec![(STEP.to_string(), 1)]);
        assert!(timer.tick(Duration::from_millis(399)).is_empty());
        assert_eq!(
            timer.tick(Duration::from_millis(1)),
            vec![(STEP.to_string(), 1)]
        );
    }

    #[test]
    fn test_counts_and_carry() {
        let mut timer = Timer::new();
        timer.add_event(STEP, Duration::from_millis(100)).unwrap();
        timer.tick(Duration::ZERO);
        assert_eq!(
            timer.tick(Duration::from_millis(250)),
            vec![(STEP.to_string(), 2)]
        );
        // 50ms carried over
        assert_eq!(
            timer.tick(Duration::from_millis(50)),
            vec![(STEP.to_string(), 1)]
        );
    }

    #[test]
    fn test_tick_cannot_be_remapped() {
        let mut timer = Timer::new();
        assert_eq!(
            timer.add_event(TICK, Duration::from_secs(1)),
            Err(TimerError::SelfRemap(TICK.to_string()))
        );
        assert!(matches!(
            timer.add_event(STEP, Duration::ZERO),
            Err(TimerError::ZeroInterval(_))
        ));
    }

    #[test]
    fn test_remove_event() {
        let mut timer = Timer::new();
        timer.add_event(STEP, Duration::from_millis(10)).unwrap();
        timer.add_event("redraw", Duration::from_millis(10)).unwrap();
        timer.remove_event(STEP);
        timer.remove_event("unknown");
        assert!(!timer.contains(STEP));
        assert_eq!(
            timer.tick(Duration::ZERO),
            vec![("redraw".to_string(), 1)]
        );
    }
}
