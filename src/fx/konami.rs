//! Konami code easter egg
//!
//! Keeps the last ten keys in a sliding window and reports a match whenever
//! the window equals the sequence exactly.

use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::sched::{Scheduler, TimerHandle};

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Body animation while rainbow mode is on
pub const RAINBOW_ANIMATION: &str = "rainbow 5s linear infinite";

/// Keyframes injected for rainbow mode
pub const RAINBOW_KEYFRAMES: &str = "@keyframes rainbow {\n    \
     0% { filter: hue-rotate(0deg); }\n    \
     100% { filter: hue-rotate(360deg); }\n}";

#[derive(Debug, Clone, Default)]
pub struct KonamiDetector {
    window: VecDeque<String>,
}

impl KonamiDetector {
    pub fn new() -> Self {
        Self {
            window: VecDeque::with_capacity(KONAMI_SEQUENCE.len()),
        }
    }

    /// Record a key. Returns true when the last ten keys spell the sequence.
    pub fn push(&mut self, key: &str) -> bool {
        if self.window.len() == KONAMI_SEQUENCE.len() {
            self.window.pop_front();
        }
        self.window.push_back(key.to_string());

        self.window.len() == KONAMI_SEQUENCE.len()
            && self.window.iter().zip(KONAMI_SEQUENCE).all(|(k, want)| k == want)
    }

    /// Keys currently held (at most the sequence length)
    pub fn buffered(&self) -> usize {
        self.window.len()
    }
}

/// Visual side of rainbow mode
pub trait RainbowEffect {
    /// Turn the effect on. Returns false if it could not be applied.
    fn start(&self) -> bool;
    fn stop(&self);
}

/// Rainbow mode lifecycle: on for a fixed window after each match
///
/// A match while active restarts the window without starting the effect a
/// second time.
pub struct RainbowMode {
    scheduler: Rc<dyn Scheduler>,
    duration_ms: u32,
    effect: Rc<dyn RainbowEffect>,
    revert: Rc<Cell<Option<TimerHandle>>>,
}

impl RainbowMode {
    pub fn new(scheduler: Rc<dyn Scheduler>, duration_ms: u32, effect: Rc<dyn RainbowEffect>) -> Self {
        Self {
            scheduler,
            duration_ms,
            effect,
            revert: Rc::new(Cell::new(None)),
        }
    }

    pub fn trigger(&self) {
        match self.revert.take() {
            Some(pending) => self.scheduler.clear_timeout(pending),
            None => {
                if !self.effect.start() {
                    return;
                }
            }
        }

        let revert = self.revert.clone();
        let effect = self.effect.clone();
        let handle = self.scheduler.set_timeout(
            self.duration_ms,
            Box::new(move || {
                revert.set(None);
                effect.stop();
            }),
        );
        self.revert.set(Some(handle));
    }

    pub fn is_active(&self) -> bool {
        self.revert.get().is_some()
    }
}
