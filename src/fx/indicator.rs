//! Floating scroll hint: fades and drifts down as the page scrolls

use crate::consts::{INDICATOR_DRIFT, INDICATOR_FADE_DISTANCE};

pub const INDICATOR_SELECTOR: &str = ".scroll-indicator";

/// 1 at the top, 0 from `INDICATOR_FADE_DISTANCE` on, linear in between
#[inline]
pub fn opacity(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / INDICATOR_FADE_DISTANCE).clamp(0.0, 1.0)
}

pub fn transform_css(scroll_y: f64) -> String {
    format!("translateX(-50%) translateY({}px)", scroll_y * INDICATOR_DRIFT)
}
