//! Scroll-triggered card reveal
//!
//! Each card animates in once, the first time it crosses the watcher
//! threshold, after a stagger proportional to its declared ordinal.

/// Attribute holding a card's ordinal
pub const ORDINAL_ATTRIBUTE: &str = "data-project";

/// Card ordinal from its `data-project` attribute. Missing or malformed
/// ordinals count as 0 (no stagger).
pub fn parse_ordinal(attr: Option<&str>) -> u32 {
    attr.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Delay before a card's reveal animation starts
#[inline]
pub fn stagger_delay_ms(ordinal: u32, stagger_ms: u32) -> u32 {
    ordinal.saturating_mul(stagger_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::REVEAL_STAGGER_MS;
    use crate::sched::{ManualScheduler, OneShotWatch, Scheduler};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_delay_is_ordinal_times_stagger() {
        for i in 0..8 {
            assert_eq!(stagger_delay_ms(i, REVEAL_STAGGER_MS), i * 100);
        }
    }

    #[test]
    fn test_parse_ordinal() {
        assert_eq!(parse_ordinal(Some("3")), 3);
        assert_eq!(parse_ordinal(Some(" 4 ")), 4);
        assert_eq!(parse_ordinal(Some("x")), 0);
        assert_eq!(parse_ordinal(None), 0);
    }

    #[test]
    fn test_reveal_fires_once_despite_reentry() {
        // Three cards, card 2 scrolls in and out repeatedly
        let clock = Rc::new(ManualScheduler::new());
        let mut watch: OneShotWatch<usize> = (0..3).collect();
        let revealed = Rc::new(RefCell::new(Vec::new()));
        let ordinals = [1u32, 2, 3];

        for intersecting in [true, false, true, true, false, true] {
            if watch.notify(&2, intersecting) {
                let delay = stagger_delay_ms(ordinals[2], REVEAL_STAGGER_MS);
                let r = revealed.clone();
                let c = clock.clone();
                clock.set_timeout(delay, Box::new(move || r.borrow_mut().push((2usize, c.now()))));
            }
        }
        clock.advance(1000);

        assert_eq!(*revealed.borrow(), vec![(2, 300)]);
        assert!(!watch.is_watching(&2));
        assert!(watch.is_watching(&0));
    }
}
