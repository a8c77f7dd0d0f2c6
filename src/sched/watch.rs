//! One-shot watch registry
//!
//! Tracks which keys are still subscribed to a notification source. The first
//! positive notification for a key reports `true` and unsubscribes it for
//! good; a fired key can never be watched again.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone)]
pub struct OneShotWatch<K> {
    watching: HashSet<K>,
    fired: HashSet<K>,
}

impl<K> Default for OneShotWatch<K> {
    fn default() -> Self {
        Self {
            watching: HashSet::new(),
            fired: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> OneShotWatch<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `key`. Returns false if it is already watched or has fired.
    pub fn watch(&mut self, key: K) -> bool {
        if self.fired.contains(&key) {
            return false;
        }
        self.watching.insert(key)
    }

    /// Deliver a notification. Returns true exactly once per key: on the
    /// first `active` notification while watched.
    pub fn notify(&mut self, key: &K, active: bool) -> bool {
        if !active || !self.watching.remove(key) {
            return false;
        }
        self.fired.insert(key.clone());
        true
    }

    pub fn is_watching(&self, key: &K) -> bool {
        self.watching.contains(key)
    }

    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    /// Keys still waiting for their first notification
    pub fn watching_count(&self) -> usize {
        self.watching.len()
    }

    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for OneShotWatch<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut watch = Self::new();
        for key in iter {
            watch.watch(key);
        }
        watch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_key() {
        let mut watch: OneShotWatch<usize> = (0..3).collect();
        assert!(watch.notify(&1, true));
        assert!(!watch.notify(&1, true));
        assert!(!watch.notify(&1, true));
        assert_eq!(watch.watching_count(), 2);
        assert_eq!(watch.fired_count(), 1);
    }

    #[test]
    fn test_inactive_notifications_keep_watching() {
        let mut watch: OneShotWatch<usize> = (0..2).collect();
        assert!(!watch.notify(&0, false));
        assert!(watch.is_watching(&0));
        assert!(watch.notify(&0, true));
        assert!(watch.has_fired(&0));
    }

    #[test]
    fn test_fired_key_cannot_rewatch() {
        let mut watch = OneShotWatch::new();
        assert!(watch.watch("card"));
        assert!(!watch.watch("card"));
        assert!(watch.notify(&"card", true));
        assert!(!watch.watch("card"));
        assert!(!watch.notify(&"card", true));
    }

    #[test]
    fn test_unknown_key_ignored() {
        let mut watch: OneShotWatch<usize> = (0..2).collect();
        assert!(!watch.notify(&9, true));
        assert_eq!(watch.fired_count(), 0);
    }
}
