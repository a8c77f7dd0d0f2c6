//! Animated index counters
//!
//! Counts a project number up from 0 to its printed value. Each tick adds
//! `target / (duration / tick)`; the display is the floor of the running
//! total, and the last tick lands exactly on the target.

use std::rc::Rc;

use crate::consts::COUNTER_PAD_WIDTH;
use crate::sched::Scheduler;

/// Elements whose text is animated
pub const NUMBER_SELECTOR: &str = ".project-number";

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: u32, tick_ms: u32) -> Self {
        let ticks = duration_ms as f64 / tick_ms.max(1) as f64;
        let increment = if ticks > 0.0 {
            target as f64 / ticks
        } else {
            target as f64
        };
        Self {
            target,
            increment,
            current: 0.0,
            finished: false,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick. Returns the value to display, or `None` once the
    /// animation has already finished.
    pub fn step(&mut self) -> Option<u32> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.finished = true;
        }
        Some(self.current.floor() as u32)
    }
}

impl Iterator for CounterAnimation {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        self.step()
    }
}

/// Zero-pad to the counter width ("07", "12", "123")
pub fn pad(value: u32) -> String {
    format!("{:0width$}", value, width = COUNTER_PAD_WIDTH)
}

/// Counter target from an element's text ("03" -> 3)
pub fn parse_target(text: &str) -> Option<u32> {
    text.trim().parse().ok()
}

/// Drive `animation` on `scheduler`, one step every `tick_ms`, handing each
/// padded value to `render`.
pub fn animate(
    scheduler: Rc<dyn Scheduler>,
    mut animation: CounterAnimation,
    tick_ms: u32,
    mut render: impl FnMut(&str) + 'static,
) {
    let next = scheduler.clone();
    scheduler.set_timeout(
        tick_ms,
        Box::new(move || {
            let Some(value) = animation.step() else {
                return;
            };
            render(&pad(value));
            if !animation.is_finished() {
                animate(next, animation, tick_ms, render);
            }
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{COUNTER_DURATION_MS, COUNTER_TICK_MS};
    use crate::sched::ManualScheduler;
    use proptest::prelude::*;
    use std::cell::RefCell;

    fn run(target: u32) -> Vec<(u64, String)> {
        let clock = Rc::new(ManualScheduler::new());
        let frames = Rc::new(RefCell::new(Vec::new()));
        let f = frames.clone();
        let c = clock.clone();
        animate(
            clock.clone(),
            CounterAnimation::new(target, COUNTER_DURATION_MS, COUNTER_TICK_MS),
            COUNTER_TICK_MS,
            move |text| f.borrow_mut().push((c.now(), text.to_string())),
        );
        clock.advance(2000);
        assert_eq!(clock.pending_timers(), 0);
        frames.take()
    }

    #[test]
    fn test_single_digit_pads() {
        let frames = run(7);
        assert_eq!(frames.last().map(|(_, s)| s.as_str()), Some("07"));
        assert_eq!(frames.first().map(|(t, _)| *t), Some(16));
    }

    #[test]
    fn test_two_digits() {
        let frames = run(12);
        assert_eq!(frames.last().map(|(_, s)| s.as_str()), Some("12"));
        assert!(frames.iter().all(|(_, s)| s.len() == 2));
    }

    #[test]
    fn test_zero_target() {
        let mut anim = CounterAnimation::new(0, 800, 16);
        assert_eq!(anim.step(), Some(0));
        assert!(anim.is_finished());
        assert_eq!(anim.step(), None);
    }

    #[test]
    fn test_uneven_duration_snaps() {
        // 100 / 16 = 6.25 ticks: the 7th tick would overshoot without the snap
        let values: Vec<u32> = CounterAnimation::new(10, 100, 16).collect();
        assert_eq!(values.len(), 7);
        assert_eq!(values.last(), Some(&10));
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("03"), Some(3));
        assert_eq!(parse_target(" 12\n"), Some(12));
        assert_eq!(parse_target("IV"), None);
        assert_eq!(pad(123), "123");
    }

    proptest! {
        #[test]
        fn never_exceeds_target(target in 0u32..10_000, duration in 0u32..3000, tick in 1u32..100) {
            let values: Vec<u32> = CounterAnimation::new(target, duration, tick).collect();
            prop_assert!(values.iter().all(|v| *v <= target));
            prop_assert_eq!(values.last().copied(), Some(target));
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}
