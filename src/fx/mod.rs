//! Effect math
//!
//! Everything the page controller writes into inline styles is computed here.
//! This module must stay DOM-free:
//! - Inputs are plain numbers/strings read from events and geometry
//! - Outputs are numbers or ready-to-apply CSS values
//! - Timing goes through `sched::Scheduler`, never browser timers

pub mod counter;
pub mod cursor;
pub mod glow;
pub mod indicator;
pub mod konami;
pub mod nav;
pub mod parallax;
pub mod progress;
pub mod reveal;
pub mod tilt;

pub use counter::CounterAnimation;
pub use cursor::CursorFollower;
pub use glow::GlowStyle;
pub use konami::KonamiDetector;
pub use nav::ScrollTarget;
pub use tilt::Tilt;

/// Bounding box in viewport (client) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Vertical center in client coordinates
    #[inline]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}
