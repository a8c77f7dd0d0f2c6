//! Scroll progress timeline
//!
//! The `.timeline` element's background is a gradient whose filled stop
//! follows the page scroll, confined to the first 90% of its length.

use crate::consts::{PROGRESS_BAND_END, PROGRESS_FILL_SCALE};

pub const TIMELINE_SELECTOR: &str = ".timeline";

/// Scroll position as a percentage of the scrollable range, in [0, 100].
///
/// A page that doesn't scroll (document no taller than the viewport) reads as
/// 0 rather than dividing by zero.
pub fn scroll_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    let percent = scroll_top / scrollable * 100.0;
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Position of the filled gradient stop, in [0, 90]
#[inline]
pub fn fill_stop(percent: f64) -> f64 {
    (percent * PROGRESS_FILL_SCALE).clamp(0.0, PROGRESS_BAND_END)
}

pub fn timeline_gradient(percent: f64) -> String {
    let fill = fill_stop(percent);
    format!(
        "linear-gradient(to bottom, transparent 0%, var(--text-primary) {fill}%, \
         var(--border-color) {fill}%, var(--border-color) {band}%, transparent 100%)",
        fill = fill,
        band = PROGRESS_BAND_END,
    )
}
