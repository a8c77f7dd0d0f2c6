//! 3D tilt toward the pointer
//!
//! Rotation is proportional to the pointer's offset from the content center.
//! The Y axis is inverted so the near edge dips toward the pointer.

use super::Rect;
use crate::consts::{TILT_DIVISOR, TILT_LIFT_PX, TILT_PERSPECTIVE_PX, TILT_SCALE};

/// Element inside a card that tilts
pub const CONTENT_SELECTOR: &str = ".project-content";

/// Identity transform applied when the pointer leaves
pub const RESET_TRANSFORM: &str =
    "perspective(1000px) rotateX(0) rotateY(0) translateY(0) scale(1)";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Degrees around the X axis (positive when pointer is below center)
    pub rotate_x: f64,
    /// Degrees around the Y axis (positive when pointer is left of center)
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_pointer(content: &Rect, client_x: f64, client_y: f64) -> Self {
        let x = client_x - content.left;
        let y = client_y - content.top;
        let center_x = content.width / 2.0;
        let center_y = content.height / 2.0;

        Self {
            rotate_x: (y - center_y) / TILT_DIVISOR,
            rotate_y: (center_x - x) / TILT_DIVISOR,
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) translateY({}px) scale({})",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y, TILT_LIFT_PX, TILT_SCALE
        )
    }
}
