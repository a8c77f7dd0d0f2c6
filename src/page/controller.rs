//! Page controller
//!
//! Built once at load. Each effect reads live geometry, computes through
//! `fx`, and writes the inline style properties it alone owns.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, KeyboardEvent, MouseEvent, ScrollLogicalPosition, Window};

use super::dom;
use super::listen::{OneShotObserver, Subscription};
use super::timers::BrowserScheduler;
use crate::banner;
use crate::consts::{
    COUNTER_THRESHOLD, COUNTER_TICK_MS, RAINBOW_DURATION_MS, REVEAL_ANIMATION, REVEAL_ROOT_MARGIN,
    REVEAL_THRESHOLD,
};
use crate::fx::konami::{RainbowEffect, RainbowMode};
use crate::fx::{
    counter, cursor, glow, indicator, konami, nav, parallax, progress, reveal, tilt,
    CounterAnimation, CursorFollower, GlowStyle, KonamiDetector, ScrollTarget, Tilt,
};
use crate::sched::{Debouncer, FrameThrottle, Scheduler};
use crate::{FxError, Settings};

/// Hue-rotation on the body plus the keyframes stylesheet it needs
struct BodyRainbow {
    document: Document,
    style: RefCell<Option<Element>>,
}

impl BodyRainbow {
    fn inject_keyframes(&self) -> Option<Element> {
        let style = self.document.create_element("style").ok()?;
        style.set_text_content(Some(konami::RAINBOW_KEYFRAMES));
        self.document.head()?.append_child(&style).ok()?;
        Some(style)
    }
}

impl RainbowEffect for BodyRainbow {
    fn start(&self) -> bool {
        let Some(style) = self.inject_keyframes() else {
            log::warn!("Rainbow keyframes could not be injected");
            return false;
        };
        if let Some(body) = self.document.body() {
            dom::set_style(&body, "animation", konami::RAINBOW_ANIMATION);
        }
        *self.style.borrow_mut() = Some(style);
        log::info!("Rainbow mode on for {} ms", RAINBOW_DURATION_MS);
        true
    }

    fn stop(&self) {
        if let Some(body) = self.document.body() {
            dom::set_style(&body, "animation", "");
        }
        if let Some(style) = self.style.borrow_mut().take() {
            style.remove();
        }
        log::debug!("Rainbow mode off");
    }
}

/// State shared by every handler
struct Page {
    window: Window,
    document: Document,
    settings: Settings,
    scheduler: Rc<dyn Scheduler>,
    cards: Vec<Element>,
    frame: FrameThrottle,
    konami: RefCell<KonamiDetector>,
    rainbow: RainbowMode,
}

impl Page {
    fn update_parallax(&self) {
        let viewport = dom::viewport_height(&self.window);
        for card in &self.cards {
            let Some(preview) = dom::child(card, parallax::PREVIEW_SELECTOR) else {
                continue;
            };
            let dy = parallax::offset(&dom::rect_of(card), viewport, self.settings.parallax_factor);
            dom::set_style(&preview, "transform", &parallax::transform_css(dy));
        }
    }

    fn update_progress(&self) {
        let Some(timeline) = dom::query(&self.document, progress::TIMELINE_SELECTOR) else {
            return;
        };
        let percent = progress::scroll_percent(
            dom::scroll_y(&self.window),
            dom::document_height(&self.document),
            dom::viewport_height(&self.window),
        );
        dom::set_style(&timeline, "background", &progress::timeline_gradient(percent));
    }

    fn on_load(&self) {
        if self.settings.scroll_progress {
            self.update_progress();
        }
        if let Some(body) = self.document.body() {
            let _ = body.class_list().add_1("loaded");
        }
        for line in &banner::WELCOME {
            dom::print_banner(line);
        }
    }
}

/// Owns every listener and observer attached to the page
pub struct PageController {
    page: Rc<Page>,
    subscriptions: Vec<Subscription>,
    observers: Vec<OneShotObserver>,
}

impl PageController {
    pub fn attach(window: Window, document: Document, settings: Settings) -> Result<Self, FxError> {
        if document.body().is_none() {
            return Err(FxError::NoBody);
        }

        let scheduler: Rc<dyn Scheduler> = Rc::new(BrowserScheduler::new(window.clone()));
        let cards = dom::query_all(&document, ".project-card");

        let page = Rc::new(Page {
            frame: FrameThrottle::new(scheduler.clone()),
            rainbow: RainbowMode::new(
                scheduler.clone(),
                RAINBOW_DURATION_MS,
                Rc::new(BodyRainbow {
                    document: document.clone(),
                    style: RefCell::new(None),
                }),
            ),
            window,
            document,
            settings,
            scheduler,
            cards,
            konami: RefCell::new(KonamiDetector::new()),
        });

        let mut controller = Self {
            page,
            subscriptions: Vec::new(),
            observers: Vec::new(),
        };

        let s = controller.page.settings.clone();
        let effects: [(&str, bool, fn(&mut Self) -> Result<(), FxError>); 11] = [
            ("cursor follower", s.cursor_follower, Self::wire_cursor),
            ("reveal", s.reveal, Self::wire_reveal),
            ("parallax", s.effective_parallax(), Self::wire_parallax),
            ("tilt", s.effective_tilt(), Self::wire_tilt),
            ("smooth anchors", s.smooth_anchors, Self::wire_anchors),
            ("counters", s.counters, Self::wire_counters),
            ("frame glow", s.frame_glow, Self::wire_glow),
            ("scroll progress", s.scroll_progress, Self::wire_progress),
            ("scroll indicator", s.scroll_indicator, Self::wire_indicator),
            ("keyboard shortcuts", s.keyboard_shortcuts, Self::wire_shortcuts),
            ("easter egg", s.easter_egg, Self::wire_easter_egg),
        ];
        for (name, enabled, wire) in effects {
            if !enabled {
                log::info!("{} disabled", name);
                continue;
            }
            if let Err(e) = wire(&mut controller) {
                log::warn!("{} skipped: {}", name, e);
            }
        }

        controller.prepare_frames();
        controller.wire_load()?;

        log::info!(
            "Folio FX attached: {} cards, {} listeners, {} observers",
            controller.page.cards.len(),
            controller.subscriptions.len(),
            controller.observers.len()
        );
        Ok(controller)
    }

    fn listen<T: JsCast + 'static>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(T) + 'static,
    ) -> Result<(), FxError> {
        self.subscriptions.push(Subscription::listen(target, event, handler)?);
        Ok(())
    }

    fn wire_cursor(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        let Some(follower) = dom::query(&page.document, ".cursor-follower") else {
            log::warn!("No .cursor-follower element, cursor effect inert");
            return Ok(());
        };
        let state = Rc::new(RefCell::new(CursorFollower::default()));

        {
            let follower = follower.clone();
            let state = state.clone();
            self.listen(&page.document, "mousemove", move |event: MouseEvent| {
                let mut cursor = state.borrow_mut();
                cursor.move_to(event.client_x() as f64, event.client_y() as f64);
                dom::set_style(&follower, "left", &cursor.left_css());
                dom::set_style(&follower, "top", &cursor.top_css());
            })?;
        }

        for element in dom::query_all(&page.document, cursor::INTERACTIVE_SELECTOR) {
            for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
                let follower = follower.clone();
                let state = state.clone();
                self.listen(&element, event, move |_: Event| {
                    let mut cursor = state.borrow_mut();
                    cursor.set_hovering(hovering);
                    dom::set_style(&follower, "transform", &cursor.transform_css());
                })?;
            }
        }
        Ok(())
    }

    fn wire_reveal(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        let stagger_ms = page.settings.reveal_stagger_ms;
        let cards = page.cards.clone();

        let observer = OneShotObserver::watch(
            cards,
            REVEAL_THRESHOLD,
            Some(REVEAL_ROOT_MARGIN),
            move |card| {
                let ordinal =
                    reveal::parse_ordinal(card.get_attribute(reveal::ORDINAL_ATTRIBUTE).as_deref());
                let delay = reveal::stagger_delay_ms(ordinal, stagger_ms);
                log::debug!("Revealing card {} in {} ms", ordinal, delay);

                let card = card.clone();
                page.scheduler.set_timeout(
                    delay,
                    Box::new(move || dom::set_style(&card, "animation", REVEAL_ANIMATION)),
                );
            },
        )?;
        self.observers.push(observer);
        Ok(())
    }

    fn wire_parallax(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        let window = page.window.clone();
        self.listen(&window, "scroll", move |_: Event| {
            let frame_page = Rc::clone(&page);
            page.frame.request(move || frame_page.update_parallax());
        })
    }

    fn wire_tilt(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        for card in &page.cards {
            let Some(content) = dom::child(card, tilt::CONTENT_SELECTOR) else {
                continue;
            };
            {
                let content = content.clone();
                self.listen(card, "mousemove", move |event: MouseEvent| {
                    let tilt = Tilt::from_pointer(
                        &dom::rect_of(&content),
                        event.client_x() as f64,
                        event.client_y() as f64,
                    );
                    dom::set_style(&content, "transform", &tilt.transform_css());
                })?;
            }
            self.listen(card, "mouseleave", move |_: Event| {
                dom::set_style(&content, "transform", tilt::RESET_TRANSFORM);
            })?;
        }
        Ok(())
    }

    fn wire_anchors(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        for anchor in dom::query_all(&page.document, nav::ANCHOR_SELECTOR) {
            let document = page.document.clone();
            let link = anchor.clone();
            self.listen(&anchor, "click", move |event: Event| {
                event.prevent_default();
                let href = link.get_attribute("href").unwrap_or_default();
                let target = nav::anchor_selector(&href).and_then(|sel| dom::query(&document, sel));
                if let Some(target) = target {
                    dom::scroll_into_view(&target, ScrollLogicalPosition::Start);
                }
            })?;
        }
        Ok(())
    }

    fn wire_counters(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        let numbers = dom::query_all(&page.document, counter::NUMBER_SELECTOR);
        let duration_ms = page.settings.effective_counter_duration_ms();

        let observer = OneShotObserver::watch(numbers, COUNTER_THRESHOLD, None, move |number| {
            let Some(target) = number.text_content().as_deref().and_then(counter::parse_target)
            else {
                return;
            };
            let number = number.clone();
            counter::animate(
                page.scheduler.clone(),
                CounterAnimation::new(target, duration_ms, COUNTER_TICK_MS),
                COUNTER_TICK_MS,
                move |text| number.set_text_content(Some(text)),
            );
        })?;
        self.observers.push(observer);
        Ok(())
    }

    fn wire_glow(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        for card in &page.cards {
            let Some(frame) = dom::child(card, glow::FRAME_SELECTOR) else {
                continue;
            };
            for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
                let frame = frame.clone();
                let style = GlowStyle::for_hover(hovering);
                self.listen(card, event, move |_: Event| {
                    for (property, value) in style.properties() {
                        dom::set_style(&frame, property, value);
                    }
                })?;
            }
        }
        Ok(())
    }

    fn wire_progress(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        let window = page.window.clone();

        {
            let page = Rc::clone(&page);
            self.listen(&window, "scroll", move |_: Event| page.update_progress())?;
        }

        let resized = {
            let page = Rc::clone(&page);
            Debouncer::new(
                page.scheduler.clone(),
                page.settings.resize_debounce_ms,
                move |()| page.update_progress(),
            )
        };
        self.listen(&window, "resize", move |_: Event| resized.call(()))
    }

    fn wire_indicator(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        let Some(hint) = dom::query(&page.document, indicator::INDICATOR_SELECTOR) else {
            return Ok(());
        };
        let window = page.window.clone();
        self.listen(&page.window, "scroll", move |_: Event| {
            let y = dom::scroll_y(&window);
            dom::set_style(&hint, "opacity", &indicator::opacity(y).to_string());
            dom::set_style(&hint, "transform", &indicator::transform_css(y));
        })
    }

    fn wire_shortcuts(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        let document = page.document.clone();
        self.listen(&document, "keydown", move |event: KeyboardEvent| {
            match ScrollTarget::from_key(&event.key()) {
                Some(ScrollTarget::Top) => dom::scroll_to_top(&page.window),
                Some(ScrollTarget::Card(n)) => {
                    if let Some(card) = dom::query(&page.document, &nav::card_selector(n)) {
                        dom::scroll_into_view(&card, ScrollLogicalPosition::Center);
                    }
                }
                None => {}
            }
        })
    }

    fn wire_easter_egg(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        let document = page.document.clone();
        self.listen(&document, "keydown", move |event: KeyboardEvent| {
            let matched = page.konami.borrow_mut().push(&event.key());
            if !matched {
                return;
            }
            dom::print_banner(&banner::RAINBOW);
            if page.settings.effective_rainbow() {
                page.rainbow.trigger();
            }
        })
    }

    /// Shimmer preparation on every preview frame
    fn prepare_frames(&self) {
        for card in &self.page.cards {
            let Some(frame) = dom::child(card, glow::FRAME_SELECTOR) else {
                continue;
            };
            for (property, value) in glow::SHIMMER_PREP {
                dom::set_style(&frame, property, value);
            }
        }
    }

    /// Run load-time setup now if the page already finished loading
    fn wire_load(&mut self) -> Result<(), FxError> {
        let page = Rc::clone(&self.page);
        if page.document.ready_state() == "complete" {
            page.on_load();
            return Ok(());
        }
        let window = page.window.clone();
        self.listen(&window, "load", move |_: Event| page.on_load())
    }
}
