//! Timer and frame scheduling
//!
//! The browser owns the real event loop. Everything here is single-threaded:
//! tasks are `FnOnce` boxes with no `Send` bound, and a task always runs to
//! completion before the next one starts.

use std::cell::{Cell, RefCell};

/// Deferred unit of work
pub type Task = Box<dyn FnOnce()>;

/// Handle to a pending timer (matches the browser's integer timer ids)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(pub i32);

/// Source of deferred execution
pub trait Scheduler {
    /// Run `task` once, `delay_ms` from now
    fn set_timeout(&self, delay_ms: u32, task: Task) -> TimerHandle;

    /// Cancel a pending timer. Unknown or already-fired handles are ignored.
    fn clear_timeout(&self, handle: TimerHandle);

    /// Run `task` before the next repaint
    fn request_frame(&self, task: Task);
}

struct PendingTimer {
    due: u64,
    handle: TimerHandle,
    task: Task,
}

/// Deterministic scheduler driven by hand
///
/// Time only moves on [`advance`](Self::advance); frames only happen on
/// [`run_frame`](Self::run_frame).
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    next_id: Cell<i32>,
    timers: RefCell<Vec<PendingTimer>>,
    frames: RefCell<Vec<Task>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time (ms since creation)
    pub fn now(&self) -> u64 {
        self.now.get()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.borrow().len()
    }

    /// Move the clock forward by `ms`, firing every timer that comes due.
    ///
    /// Timers fire in deadline order (ties in creation order), with the clock
    /// set to each timer's deadline while it runs. Timers scheduled by a
    /// firing task also fire if they come due within the window.
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        loop {
            // Release the borrow before running: tasks may schedule more work
            let next = {
                let mut timers = self.timers.borrow_mut();
                let due = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.handle.0))
                    .map(|(i, _)| i);
                due.map(|i| timers.remove(i))
            };
            let Some(timer) = next else { break };
            self.now.set(timer.due);
            (timer.task)();
        }
        self.now.set(target);
    }

    /// Run all frame callbacks queued so far. Returns how many ran.
    ///
    /// Callbacks requested while the frame runs wait for the next frame.
    pub fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut *self.frames.borrow_mut());
        let count = frames.len();
        for task in frames {
            task();
        }
        count
    }
}

impl Scheduler for ManualScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = TimerHandle(id);
        self.timers.borrow_mut().push(PendingTimer {
            due: self.now.get() + delay_ms as u64,
            handle,
            task,
        });
        handle
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        self.timers.borrow_mut().retain(|t| t.handle != handle);
    }

    fn request_frame(&self, task: Task) {
        self.frames.borrow_mut().push(task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<(u64, &'static str)>>>, Rc<ManualScheduler>) {
        (Rc::new(RefCell::new(Vec::new())), Rc::new(ManualScheduler::new()))
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let (log, clock) = recorder();
        for (delay, name) in [(50, "late"), (10, "early"), (50, "late-2")] {
            let log = log.clone();
            let c = clock.clone();
            clock.set_timeout(delay, Box::new(move || log.borrow_mut().push((c.now(), name))));
        }

        clock.advance(30);
        assert_eq!(*log.borrow(), vec![(10, "early")]);

        clock.advance(30);
        assert_eq!(
            *log.borrow(),
            vec![(10, "early"), (50, "late"), (50, "late-2")]
        );
        assert_eq!(clock.now(), 60);
        assert_eq!(clock.pending_timers(), 0);
    }

    #[test]
    fn test_cleared_timer_never_fires() {
        let (log, clock) = recorder();
        let l = log.clone();
        let handle = clock.set_timeout(20, Box::new(move || l.borrow_mut().push((0, "x"))));
        clock.clear_timeout(handle);
        clock.advance(100);
        assert!(log.borrow().is_empty());

        // Clearing twice is harmless
        clock.clear_timeout(handle);
    }

    #[test]
    fn test_cleared_timer_releases_captures() {
        let clock = ManualScheduler::new();
        let captured = Rc::new(());
        let held = captured.clone();
        let handle = clock.set_timeout(20, Box::new(move || drop(held)));
        assert_eq!(Rc::strong_count(&captured), 2);

        clock.clear_timeout(handle);
        assert_eq!(Rc::strong_count(&captured), 1);
    }

    #[test]
    fn test_nested_timer_fires_within_same_advance() {
        let (log, clock) = recorder();
        let inner_log = log.clone();
        let inner_clock = clock.clone();
        clock.set_timeout(
            10,
            Box::new(move || {
                let l = inner_log.clone();
                let c = inner_clock.clone();
                inner_clock.set_timeout(10, Box::new(move || l.borrow_mut().push((c.now(), "inner"))));
            }),
        );
        clock.advance(25);
        assert_eq!(*log.borrow(), vec![(20, "inner")]);
    }

    #[test]
    fn test_frame_requested_during_frame_waits() {
        let clock = Rc::new(ManualScheduler::new());
        let c = clock.clone();
        clock.request_frame(Box::new(move || c.request_frame(Box::new(|| {}))));
        assert_eq!(clock.run_frame(), 1);
        assert_eq!(clock.pending_frames(), 1);
        assert_eq!(clock.run_frame(), 1);
        assert_eq!(clock.run_frame(), 0);
    }
}
