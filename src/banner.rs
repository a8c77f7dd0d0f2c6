//! Console banner printed once on load
//!
//! Cosmetic only. Each line carries the CSS the browser console applies to it
//! through a `%c` directive.

use crate::fx::nav::SHORTCUT_HELP;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerLine {
    pub text: &'static str,
    pub css: &'static str,
}

impl BannerLine {
    /// Format string for `console.log(fmt, css)`
    pub fn directive(&self) -> String {
        format!("%c{}", self.text)
    }
}

pub const WELCOME: [BannerLine; 3] = [
    BannerLine {
        text: "\u{1F3A8} Web Development Journey",
        css: "font-size: 24px; font-weight: bold; color: #ffffff;",
    },
    BannerLine {
        text: "Exploring Critical Web Design through 5 projects",
        css: "font-size: 14px; color: #b0b0b0;",
    },
    BannerLine {
        text: SHORTCUT_HELP,
        css: "font-size: 12px; color: #707070; font-family: monospace;",
    },
];

pub const RAINBOW: BannerLine = BannerLine {
    text: "\u{1F308} RAINBOW MODE ACTIVATED! \u{1F308}",
    css: "font-size: 20px; font-weight: bold; \
          background: linear-gradient(to right, red, orange, yellow, green, blue, indigo, violet); \
          -webkit-background-clip: text; -webkit-text-fill-color: transparent;",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_prefix() {
        assert_eq!(WELCOME[1].directive(), "%cExploring Critical Web Design through 5 projects");
        assert!(WELCOME[2].text.contains("1-5"));
    }
}
