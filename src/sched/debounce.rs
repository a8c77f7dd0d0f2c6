//! Trailing-edge debounce
//!
//! A burst of calls closer together than the quiet period collapses into a
//! single call, made `wait_ms` after the last one, with the last call's
//! arguments.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Scheduler, TimerHandle};

pub struct Debouncer<A> {
    scheduler: Rc<dyn Scheduler>,
    wait_ms: u32,
    callback: Rc<RefCell<dyn FnMut(A)>>,
    pending: Rc<Cell<Option<TimerHandle>>>,
}

impl<A: 'static> Debouncer<A> {
    pub fn new(
        scheduler: Rc<dyn Scheduler>,
        wait_ms: u32,
        callback: impl FnMut(A) + 'static,
    ) -> Self {
        Self {
            scheduler,
            wait_ms,
            callback: Rc::new(RefCell::new(callback)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Schedule the callback, superseding any call still waiting
    pub fn call(&self, args: A) {
        self.cancel();

        let callback = self.callback.clone();
        let pending = self.pending.clone();
        let handle = self.scheduler.set_timeout(
            self.wait_ms,
            Box::new(move || {
                pending.set(None);
                (&mut *callback.borrow_mut())(args);
            }),
        );
        self.pending.set(Some(handle));
    }

    /// Drop the waiting call, if any
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.clear_timeout(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sched::ManualScheduler;

    fn setup(wait_ms: u32) -> (Rc<ManualScheduler>, Rc<RefCell<Vec<(u64, u32)>>>, Debouncer<u32>) {
        let clock = Rc::new(ManualScheduler::new());
        let calls = Rc::new(RefCell::new(Vec::new()));
        let c = clock.clone();
        let log = calls.clone();
        let debounced = Debouncer::new(clock.clone(), wait_ms, move |arg| {
            log.borrow_mut().push((c.now(), arg));
        });
        (clock, calls, debounced)
    }

    #[test]
    fn test_burst_collapses_to_last_call() {
        let (clock, calls, debounced) = setup(100);

        debounced.call(0);
        clock.advance(30);
        debounced.call(30);
        clock.advance(30);
        debounced.call(60);
        assert!(debounced.is_pending());

        clock.advance(99);
        assert!(calls.borrow().is_empty());

        clock.advance(1);
        assert_eq!(*calls.borrow(), vec![(160, 60)]);
        assert!(!debounced.is_pending());

        clock.advance(1000);
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_spaced_calls_each_run() {
        let (clock, calls, debounced) = setup(100);
        debounced.call(1);
        clock.advance(150);
        debounced.call(2);
        clock.advance(150);
        assert_eq!(*calls.borrow(), vec![(100, 1), (250, 2)]);
    }

    #[test]
    fn test_cancel_drops_pending_call() {
        let (clock, calls, debounced) = setup(100);
        debounced.call(7);
        debounced.cancel();
        clock.advance(500);
        assert!(calls.borrow().is_empty());
        assert_eq!(clock.pending_timers(), 0);
    }

    #[test]
    fn test_superseded_calls_release_arguments() {
        let clock = Rc::new(ManualScheduler::new());
        let debounced = Debouncer::new(clock.clone(), 100, |_: Rc<()>| {});
        let first = Rc::new(());

        debounced.call(first.clone());
        assert_eq!(Rc::strong_count(&first), 2);

        debounced.call(Rc::new(()));
        assert_eq!(Rc::strong_count(&first), 1);
        assert_eq!(clock.pending_timers(), 1);
    }

    #[test]
    fn test_only_one_timer_outstanding() {
        let (clock, _calls, debounced) = setup(100);
        for i in 0..20 {
            debounced.call(i);
            clock.advance(5);
        }
        assert_eq!(clock.pending_timers(), 1);
    }
}
