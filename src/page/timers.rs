//! Browser-backed scheduler
//!
//! Timer callbacks are owned here, keyed by timeout id, so a cleared timer
//! frees its closure (and everything it captured) right away.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::sched::{Scheduler, Task, TimerHandle};

type TimerCallbacks = Rc<RefCell<HashMap<i32, Closure<dyn FnMut()>>>>;

pub struct BrowserScheduler {
    window: Window,
    timers: TimerCallbacks,
}

impl BrowserScheduler {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            timers: Rc::new(RefCell::new(HashMap::new())),
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn set_timeout(&self, delay_ms: u32, task: Task) -> TimerHandle {
        let id = Rc::new(Cell::new(0));
        let callback = {
            let id = id.clone();
            let timers = Rc::downgrade(&self.timers);
            Closure::<dyn FnMut()>::once(move || {
                // Detach before running: the task may schedule new timers.
                // The closure itself is released once this call returns.
                let _fired = timers
                    .upgrade()
                    .and_then(|timers| timers.borrow_mut().remove(&id.get()));
                task();
            })
        };

        match self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        ) {
            Ok(handle) => {
                id.set(handle);
                self.timers.borrow_mut().insert(handle, callback);
                TimerHandle(handle)
            }
            Err(e) => {
                log::warn!("setTimeout failed: {:?}", e);
                TimerHandle(0)
            }
        }
    }

    fn clear_timeout(&self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle.0);
        self.timers.borrow_mut().remove(&handle.0);
    }

    fn request_frame(&self, task: Task) {
        // Frames are never cancelled, so the callback always runs and frees itself
        let callback = Closure::once_into_js(move |_time: f64| task());
        if let Err(e) = self.window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
}
