//! Event subscriptions
//!
//! Browser callbacks are owned by Rust values: dropping a [`Subscription`]
//! removes its listener, dropping a [`OneShotObserver`] disconnects it.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::FxError;
use crate::sched::OneShotWatch;

/// A live event listener
pub struct Subscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Subscription {
    /// Listen for `event` on `target`. Events that don't cast to `T` are
    /// skipped.
    pub fn listen<T>(
        target: &EventTarget,
        event: &'static str,
        mut handler: impl FnMut(T) + 'static,
    ) -> Result<Self, FxError>
    where
        T: JsCast + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if let Ok(event) = event.dyn_into::<T>() {
                handler(event);
            }
        });
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Intersection observer that reports each element at most once
///
/// The first time an element intersects it is unobserved, then handed to
/// the callback.
pub struct OneShotObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl OneShotObserver {
    pub fn watch(
        elements: Vec<Element>,
        threshold: f64,
        root_margin: Option<&str>,
        mut on_enter: impl FnMut(&Element) + 'static,
    ) -> Result<Self, FxError> {
        let watch: Rc<RefCell<OneShotWatch<usize>>> =
            Rc::new(RefCell::new((0..elements.len()).collect()));
        let targets = elements.clone();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target = entry.target();
                    let Some(slot) = targets.iter().position(|el| *el == target) else {
                        continue;
                    };
                    if watch.borrow_mut().notify(&slot, entry.is_intersecting()) {
                        observer.unobserve(&target);
                        on_enter(&target);
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for element in &elements {
            observer.observe(element);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OneShotObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
