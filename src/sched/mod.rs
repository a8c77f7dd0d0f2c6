//! Scheduling primitives
//!
//! Effects never touch browser timers directly. They go through the
//! [`Scheduler`] trait so the same code runs against `setTimeout` /
//! `requestAnimationFrame` in the page and against [`ManualScheduler`] in
//! tests:
//! - `clock`: the trait, timer handles and the manual (fake) clock
//! - `debounce`: collapse bursts of calls into one deferred call
//! - `frame`: at most one pending update per animation frame
//! - `watch`: one-shot registry for "fire once, then forget" observers

pub mod clock;
pub mod debounce;
pub mod frame;
pub mod watch;

pub use clock::{ManualScheduler, Scheduler, Task, TimerHandle};
pub use debounce::Debouncer;
pub use frame::FrameThrottle;
pub use watch::OneShotWatch;
