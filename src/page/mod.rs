//! Browser side: wires `fx` effects to the live page
//!
//! - `dom`: query and style helpers
//! - `listen`: event subscriptions and one-shot intersection observers
//! - `timers`: `Scheduler` backed by `setTimeout` / `requestAnimationFrame`
//! - `controller`: the page controller owning every subscription

mod controller;
mod dom;
mod listen;
mod timers;

use std::cell::RefCell;

pub use controller::PageController;
pub use listen::{OneShotObserver, Subscription};
pub use timers::BrowserScheduler;

use crate::{FxError, Settings};

thread_local! {
    /// The page is the controller's lifetime: it is parked here and never
    /// torn down.
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// Build the controller for the current document and keep it alive
pub fn start() -> Result<(), FxError> {
    let window = web_sys::window().ok_or(FxError::NoWindow)?;
    let document = window.document().ok_or(FxError::NoDocument)?;

    let mut settings = Settings::load();
    if dom::prefers_reduced_motion(&window) {
        log::info!("prefers-reduced-motion set, motion effects disabled");
        settings.reduced_motion = true;
    }

    let controller = PageController::attach(window, document, settings)?;
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    Ok(())
}
