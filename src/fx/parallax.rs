//! Scroll parallax on card previews

use super::Rect;

/// Card preview that receives the offset
pub const PREVIEW_SELECTOR: &str = ".preview-frame";

/// Vertical offset for a card: distance from its center to the viewport
/// center, scaled by `factor`. Cards below the middle push down, cards above
/// pull up.
#[inline]
pub fn offset(card: &Rect, viewport_height: f64, factor: f64) -> f64 {
    (card.center_y() - viewport_height / 2.0) * factor
}

pub fn transform_css(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PARALLAX_FACTOR;

    #[test]
    fn test_centered_card_has_no_offset() {
        let card = Rect::new(0.0, 300.0, 400.0, 200.0);
        assert_eq!(offset(&card, 800.0, PARALLAX_FACTOR), 0.0);
    }

    #[test]
    fn test_offset_sign_follows_position() {
        let below = Rect::new(0.0, 900.0, 400.0, 200.0);
        let above = Rect::new(0.0, -500.0, 400.0, 200.0);
        // (1000 - 400) * 0.02
        assert!((offset(&below, 800.0, PARALLAX_FACTOR) - 12.0).abs() < 1e-9);
        // (-400 - 400) * 0.02
        assert!((offset(&above, 800.0, PARALLAX_FACTOR) + 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_transform_css() {
        assert_eq!(transform_css(-2.5), "translateY(-2.5px)");
        assert_eq!(transform_css(0.0), "translateY(0px)");
    }
}
