use crate::config::TICK_RATE;

/// Result of advancing a counter by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Continue(i32),
    Done(i32),
}

/// Count-up from 0 to `target` over `duration` seconds at `TICK_RATE` ticks per second.
///
/// The displayed value never decreases and never exceeds the target. A target of zero or
/// less is finished from the start and displays 0.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterState {
    target: i32,
    increment: f64,
    accumulator: f64,
    displayed: i32,
    triggered: bool,
    finished: bool,
}

impl CounterState {
    pub fn new(target: i32, duration_secs: f64) -> Self {
        let ticks = (duration_secs * TICK_RATE).max(1.0);
        Self {
            target,
            increment: target.max(0) as f64 / ticks,
            accumulator: 0.0,
            displayed: 0,
            triggered: false,
            finished: target <= 0,
        }
    }

    pub fn displayed(&self) -> i32 {
        self.displayed
    }

    pub fn has_triggered(&self) -> bool {
        self.triggered
    }

    /// Whether a repeating tick should be running right now.
    pub fn is_running(&self) -> bool {
        self.triggered && !self.finished
    }

    pub fn trigger(&mut self) {
        self.triggered = true;
    }

    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Done(self.displayed);
        }
        if !self.triggered {
            return Tick::Continue(self.displayed);
        }

        self.accumulator += self.increment;
        if self.accumulator >= self.target as f64 {
            self.displayed = self.target;
            self.finished = true;
            Tick::Done(self.displayed)
        } else {
            self.displayed = self.displayed.max(self.accumulator.floor() as i32);
            Tick::Continue(self.displayed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(state: &mut CounterState) -> (Vec<i32>, usize) {
        let mut seen = vec![state.displayed()];
        let mut ticks = 0;
        loop {
            ticks += 1;
            assert!(ticks < 10_000, "counter never finished");
            match state.tick() {
                Tick::Continue(v) => seen.push(v),
                Tick::Done(v) => {
                    seen.push(v);
                    return (seen, ticks);
                }
            }
        }
    }

    #[test]
    fn thirty_over_two_seconds() {
        let mut state = CounterState::new(30, 2.0);
        state.trigger();
        let (seen, ticks) = run_to_completion(&mut state);

        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(seen.iter().all(|v| *v <= 30));
        assert_eq!(*seen.last().unwrap(), 30);
        // Counts ticks, not wall time: 2 s at 60 ticks/s, within one tick.
        assert!((119..=121).contains(&ticks), "took {} ticks", ticks);
        // The browser interval is 1000 / 60 truncated to 16 ms, so 120 ticks land at 1920 ms.
        assert_eq!(crate::config::tick_interval_ms(), 16);
        assert_eq!(ticks as u32 * crate::config::tick_interval_ms(), 1920);
    }

    #[test]
    fn large_target_hits_exact_value() {
        let mut state = CounterState::new(500, 2.0);
        state.trigger();
        let (seen, _) = run_to_completion(&mut state);
        assert_eq!(*seen.last().unwrap(), 500);
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn zero_and_negative_targets_never_tick() {
        for target in [0, -5] {
            let mut state = CounterState::new(target, 2.0);
            state.trigger();
            assert!(!state.is_running());
            assert_eq!(state.tick(), Tick::Done(0));
            assert_eq!(state.displayed(), 0);
        }
    }

    #[test]
    fn does_not_advance_before_trigger() {
        let mut state = CounterState::new(150, 2.0);
        for _ in 0..10 {
            assert_eq!(state.tick(), Tick::Continue(0));
        }
        assert!(!state.has_triggered());
    }

    #[test]
    fn frozen_after_finishing() {
        let mut state = CounterState::new(100, 0.1);
        state.trigger();
        run_to_completion(&mut state);
        for _ in 0..5 {
            assert_eq!(state.tick(), Tick::Done(100));
        }
    }
}
