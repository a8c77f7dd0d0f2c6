//! Cursor follower
//!
//! A decorative element pinned to the pointer. Position is copied straight
//! from each pointer event with no smoothing.

use crate::consts::CURSOR_HOVER_SCALE;

/// Elements that enlarge the follower on hover
pub const INTERACTIVE_SELECTOR: &str = "a, button, .project-card";

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorFollower {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
}

impl CursorFollower {
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn left_css(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn top_css(&self) -> String {
        format!("{}px", self.y)
    }

    pub fn scale(&self) -> f64 {
        if self.hovering { CURSOR_HOVER_SCALE } else { 1.0 }
    }

    /// Centers the element on the pointer, scaled for hover
    pub fn transform_css(&self) -> String {
        format!("translate(-50%, -50%) scale({})", self.scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hover_scale_toggles() {
        let mut cursor = CursorFollower::default();
        assert_eq!(cursor.transform_css(), "translate(-50%, -50%) scale(1)");
        cursor.set_hovering(true);
        assert_eq!(cursor.transform_css(), "translate(-50%, -50%) scale(1.5)");
        cursor.set_hovering(false);
        assert_eq!(cursor.scale(), 1.0);
    }

    #[test]
    fn test_position_css() {
        let mut cursor = CursorFollower::default();
        cursor.move_to(120.0, 48.0);
        assert_eq!(cursor.left_css(), "120px");
        assert_eq!(cursor.top_css(), "48px");
    }

    proptest! {
        #[test]
        fn follower_tracks_pointer_exactly(moves in prop::collection::vec((-4000i32..4000, -4000i32..4000), 1..50)) {
            let mut cursor = CursorFollower::default();
            for (x, y) in moves {
                cursor.move_to(x as f64, y as f64);
                prop_assert_eq!(cursor.x, x as f64);
                prop_assert_eq!(cursor.y, y as f64);
                prop_assert_eq!(cursor.left_css(), format!("{}px", x));
                prop_assert_eq!(cursor.top_css(), format!("{}px", y));
            }
        }
    }
}
