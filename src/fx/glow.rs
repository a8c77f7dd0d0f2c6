//! Preview frame glow on card hover

/// Frame inside a card that glows
pub const FRAME_SELECTOR: &str = ".frame-content";

/// Inline style pair written to the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlowStyle {
    pub filter: &'static str,
    pub transition: &'static str,
}

impl GlowStyle {
    /// Brighten with an eased transition
    pub const ENTER: GlowStyle = GlowStyle {
        filter: "brightness(1.1) saturate(1.2)",
        transition: "all 0.4s ease",
    };

    /// Snap back with no transition
    pub const LEAVE: GlowStyle = GlowStyle {
        filter: "brightness(1) saturate(1)",
        transition: "none",
    };

    pub fn for_hover(hovering: bool) -> Self {
        if hovering { Self::ENTER } else { Self::LEAVE }
    }

    /// Properties in write order. The transition has to land before the
    /// filter for it to govern that filter change.
    pub fn properties(&self) -> [(&'static str, &'static str); 2] {
        [("transition", self.transition), ("filter", self.filter)]
    }
}

/// Shimmer preparation applied once at load to each card's own frame
pub const SHIMMER_PREP: [(&str, &str); 2] = [("position", "relative"), ("overflow", "hidden")];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_reverts_instantly() {
        let leave = GlowStyle::for_hover(false);
        assert_eq!(leave.filter, "brightness(1) saturate(1)");
        assert_eq!(leave.properties()[0], ("transition", "none"));
    }

    #[test]
    fn test_enter_transition_written_first() {
        let props = GlowStyle::for_hover(true).properties();
        assert_eq!(props[0], ("transition", "all 0.4s ease"));
        assert_eq!(props[1], ("filter", "brightness(1.1) saturate(1.2)"));
    }

    #[test]
    fn test_shimmer_prep_leaves_hover_properties_alone() {
        // Prep and hover write the same frame element
        for style in [GlowStyle::ENTER, GlowStyle::LEAVE] {
            for (hover_prop, _) in style.properties() {
                assert!(SHIMMER_PREP.iter().all(|(prep_prop, _)| *prep_prop != hover_prop));
            }
        }
    }
}
