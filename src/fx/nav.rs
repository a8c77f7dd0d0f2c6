//! Smooth-scroll navigation: keyboard shortcuts and in-page anchors

use crate::consts::SHORTCUT_MAX_CARD;

/// Same-page anchors intercepted for smooth scrolling
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Shortcut help printed with the welcome banner
pub const SHORTCUT_HELP: &str = "Keyboard shortcuts:\n  \u{2022} Press \"h\" to scroll to top\n  \u{2022} Press 1-5 to jump to projects";

/// Where a shortcut scrolls to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    /// Page top
    Top,
    /// Card with the given `data-project` ordinal, centered
    Card(u8),
}

impl ScrollTarget {
    /// Map a `KeyboardEvent.key` value to a target. Unknown keys map to None.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "h" | "H" => Some(ScrollTarget::Top),
            _ => match key.parse::<u8>() {
                Ok(n) if (1..=SHORTCUT_MAX_CARD).contains(&n) => Some(ScrollTarget::Card(n)),
                _ => None,
            },
        }
    }
}

/// Selector for the card with ordinal `n`
pub fn card_selector(n: u8) -> String {
    format!("[data-project=\"{}\"]", n)
}

/// Selector an anchor's `href` points at, if it names a fragment
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href.len() > 1 && href.starts_with('#') {
        Some(href)
    } else {
        None
    }
}
