//! Effect settings and preferences
//!
//! Read-only overrides: the page reads them from LocalStorage at start-up and
//! never writes them back. Every field has a default, so partial or older
//! JSON still loads.

use serde::{Deserialize, Serialize};

use crate::consts::{
    COUNTER_DURATION_MS, PARALLAX_FACTOR, RESIZE_DEBOUNCE_MS, REVEAL_STAGGER_MS,
};

/// Effect settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Pointer Effects ===
    /// Decorative element that follows the pointer
    pub cursor_follower: bool,
    /// 3D card tilt toward the pointer
    pub tilt: bool,
    /// Preview frame glow on card hover
    pub frame_glow: bool,

    // === Scroll Effects ===
    /// Cards animate in when first scrolled into view
    pub reveal: bool,
    /// Preview frames drift with scroll
    pub parallax: bool,
    /// Project numbers count up when first seen
    pub counters: bool,
    /// Timeline gradient follows scroll position
    pub scroll_progress: bool,
    /// Scroll hint fades out as the page scrolls
    pub scroll_indicator: bool,

    // === Navigation ===
    /// Same-page anchors scroll smoothly
    pub smooth_anchors: bool,
    /// "h" and 1-5 shortcuts
    pub keyboard_shortcuts: bool,
    /// Konami code rainbow mode
    pub easter_egg: bool,

    // === Tuning ===
    /// Fraction of card-to-center distance applied as parallax offset
    pub parallax_factor: f64,
    /// Reveal delay per card ordinal (ms)
    pub reveal_stagger_ms: u32,
    /// Counter animation length (ms)
    pub counter_duration_ms: u32,
    /// Resize quiet period before recomputing progress (ms)
    pub resize_debounce_ms: u32,

    // === Accessibility ===
    /// Reduced motion (no parallax, tilt, count-up or rainbow)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Pointer effects
            cursor_follower: true,
            tilt: true,
            frame_glow: true,

            // Scroll effects
            reveal: true,
            parallax: true,
            counters: true,
            scroll_progress: true,
            scroll_indicator: true,

            // Navigation
            smooth_anchors: true,
            keyboard_shortcuts: true,
            easter_egg: true,

            // Tuning
            parallax_factor: PARALLAX_FACTOR,
            reveal_stagger_ms: REVEAL_STAGGER_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,

            // Accessibility
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective parallax (respects reduced_motion)
    pub fn effective_parallax(&self) -> bool {
        self.parallax && !self.reduced_motion
    }

    /// Effective tilt (respects reduced_motion)
    pub fn effective_tilt(&self) -> bool {
        self.tilt && !self.reduced_motion
    }

    /// Effective rainbow animation (respects reduced_motion). The easter egg
    /// still logs its banner when this is off.
    pub fn effective_rainbow(&self) -> bool {
        self.easter_egg && !self.reduced_motion
    }

    /// Counter duration; reduced motion jumps straight to the final value
    pub fn effective_counter_duration_ms(&self) -> u32 {
        if self.reduced_motion {
            0
        } else {
            self.counter_duration_ms
        }
    }

    /// Parse stored JSON, ignoring anything malformed
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                None
            }
        }
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "folio_fx_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
