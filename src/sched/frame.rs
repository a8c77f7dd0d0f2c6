//! Per-frame coalescing
//!
//! Scroll events can arrive many times per frame. `FrameThrottle` keeps one
//! pending-frame slot: the first request in a frame schedules the update,
//! later requests are dropped until that update has run.

use std::cell::Cell;
use std::rc::Rc;

use super::Scheduler;

pub struct FrameThrottle {
    scheduler: Rc<dyn Scheduler>,
    pending: Rc<Cell<bool>>,
}

impl FrameThrottle {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            scheduler,
            pending: Rc::new(Cell::new(false)),
        }
    }

    /// Schedule `update` for the next frame unless one is already pending.
    /// Returns whether this request was scheduled.
    pub fn request(&self, update: impl FnOnce() + 'static) -> bool {
        if self.pending.get() {
            return false;
        }
        self.pending.set(true);

        let pending = self.pending.clone();
        self.scheduler.request_frame(Box::new(move || {
            update();
            pending.set(false);
        }));
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::ManualScheduler;
    use std::cell::RefCell;

    #[test]
    fn test_many_requests_one_update_per_frame() {
        let clock = Rc::new(ManualScheduler::new());
        let throttle = FrameThrottle::new(clock.clone());
        let updates = Rc::new(RefCell::new(0u32));

        let scheduled: Vec<bool> = (0..5)
            .map(|_| {
                let u = updates.clone();
                throttle.request(move || *u.borrow_mut() += 1)
            })
            .collect();
        assert_eq!(scheduled, vec![true, false, false, false, false]);
        assert!(throttle.is_pending());

        assert_eq!(clock.run_frame(), 1);
        assert_eq!(*updates.borrow(), 1);
        assert!(!throttle.is_pending());
    }

    #[test]
    fn test_next_frame_accepts_new_request() {
        let clock = Rc::new(ManualScheduler::new());
        let throttle = FrameThrottle::new(clock.clone());
        let updates = Rc::new(RefCell::new(0u32));

        for _ in 0..3 {
            let u = updates.clone();
            throttle.request(move || *u.borrow_mut() += 1);
            let u = updates.clone();
            throttle.request(move || *u.borrow_mut() += 1);
            clock.run_frame();
        }
        assert_eq!(*updates.borrow(), 3);
    }
}
