//! Folio FX - page decoration effects for a static portfolio site
//!
//! Core modules:
//! - `fx`: Pure effect math and small state machines (no DOM)
//! - `sched`: Timer/frame scheduling, debounce, one-shot watches
//! - `page`: Browser controller wiring effects to the DOM (wasm32 only)
//! - `settings`: Per-effect toggles and tunables
//! - `banner`: Console welcome banner

pub mod banner;
pub mod error;
pub mod fx;
#[cfg(target_arch = "wasm32")]
pub mod page;
pub mod sched;
pub mod settings;

pub use error::FxError;
pub use settings::Settings;

/// Effect constants
pub mod consts {
    /// Cursor follower scale while hovering an interactive element
    pub const CURSOR_HOVER_SCALE: f64 = 1.5;

    /// Reveal watcher visibility threshold (fraction of the card)
    pub const REVEAL_THRESHOLD: f64 = 0.15;
    /// Reveal watcher root margin (shrinks the bottom of the trigger region)
    pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
    /// Stagger per card ordinal (ms)
    pub const REVEAL_STAGGER_MS: u32 = 100;
    /// Animation applied when a card is revealed
    pub const REVEAL_ANIMATION: &str = "slideInView 0.8s ease-out forwards";

    /// Parallax: fraction of the card-to-viewport-center distance applied
    pub const PARALLAX_FACTOR: f64 = 0.02;

    /// Tilt: pixels of pointer offset per degree of rotation
    pub const TILT_DIVISOR: f64 = 30.0;
    pub const TILT_PERSPECTIVE_PX: f64 = 1000.0;
    pub const TILT_LIFT_PX: f64 = -5.0;
    pub const TILT_SCALE: f64 = 1.01;

    /// Counter watcher visibility threshold
    pub const COUNTER_THRESHOLD: f64 = 0.5;
    /// Counter animation duration (ms)
    pub const COUNTER_DURATION_MS: u32 = 800;
    /// Counter tick interval (ms, ~60 updates per second)
    pub const COUNTER_TICK_MS: u32 = 16;
    /// Minimum digits shown by a counter
    pub const COUNTER_PAD_WIDTH: usize = 2;

    /// Timeline fill scale and upper bound (percent of element length)
    pub const PROGRESS_FILL_SCALE: f64 = 0.9;
    pub const PROGRESS_BAND_END: f64 = 90.0;

    /// Scroll hint fully transparent after this many pixels
    pub const INDICATOR_FADE_DISTANCE: f64 = 300.0;
    /// Scroll hint drift per pixel scrolled
    pub const INDICATOR_DRIFT: f64 = 0.5;

    /// Cards reachable by digit shortcuts
    pub const SHORTCUT_MAX_CARD: u8 = 5;

    /// Rainbow mode duration (ms)
    pub const RAINBOW_DURATION_MS: u32 = 5000;

    /// Resize handler quiet period (ms)
    pub const RESIZE_DEBOUNCE_MS: u32 = 100;
}
