//! One-shot reveal-on-scroll watch list.
//!
//! # Responsibility
//! - Track which watched elements have been revealed.
//! - Tell the host when to mark an element visible and stop observing it.
//!
//! # Invariants
//! - `Watching -> Revealed` is the only transition, and it happens once.
//! - A revealed element ignores every later intersection report.

use log::debug;

/// Per-element watch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    Watching,
    Revealed,
}

/// Outcome of one intersection report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    /// Mark visible and stop observing.
    Reveal,
    Unchanged,
    /// The key was never observed.
    Unknown,
}

/// Watch list keyed by host element handles.
#[derive(Debug, Clone)]
pub struct RevealWatchList<K> {
    entries: Vec<(K, WatchState)>,
    threshold: f64,
}

impl<K: PartialEq> RevealWatchList<K> {
    pub fn new(threshold: f64) -> Self {
        Self {
            entries: Vec::new(),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Starts watching `key`; observing the same key twice is a no-op.
    pub fn observe(&mut self, key: K) {
        if self.state(&key).is_none() {
            self.entries.push((key, WatchState::Watching));
        }
    }

    pub fn state(&self, key: &K) -> Option<WatchState> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, state)| *state)
    }

    /// Applies one intersection report.
    pub fn on_intersection(
        &mut self,
        key: &K,
        is_intersecting: bool,
        ratio: f64,
    ) -> RevealTransition {
        let threshold = self.threshold;
        let Some((_, state)) = self.entries.iter_mut().find(|(candidate, _)| candidate == key)
        else {
            return RevealTransition::Unknown;
        };
        if *state == WatchState::Revealed || !is_intersecting || ratio < threshold {
            return RevealTransition::Unchanged;
        }
        *state = WatchState::Revealed;
        debug!("event=reveal module=reveal status=ok ratio={ratio:.2}");
        RevealTransition::Reveal
    }

    /// Reveals everything still watched; used when the host cannot observe
    /// intersections. Returns the keys that changed.
    pub fn reveal_all(&mut self) -> Vec<K>
    where
        K: Clone,
    {
        let mut revealed = Vec::new();
        for (key, state) in &mut self.entries {
            if *state == WatchState::Watching {
                *state = WatchState::Revealed;
                revealed.push(key.clone());
            }
        }
        revealed
    }

    /// Keys still waiting to be revealed.
    pub fn pending(&self) -> impl Iterator<Item = &K> {
        self.entries
            .iter()
            .filter(|(_, state)| *state == WatchState::Watching)
            .map(|(key, _)| key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{RevealTransition, RevealWatchList};

    #[test]
    fn unknown_keys_are_reported() {
        let mut watch = RevealWatchList::new(0.15);
        watch.observe(1);
        assert_eq!(
            watch.on_intersection(&2, true, 1.0),
            RevealTransition::Unknown
        );
    }

    #[test]
    fn observing_twice_keeps_one_entry() {
        let mut watch = RevealWatchList::new(0.15);
        watch.observe("a");
        watch.observe("a");
        assert_eq!(watch.len(), 1);
    }

    #[test]
    fn intersecting_below_threshold_does_not_reveal() {
        let mut watch = RevealWatchList::new(0.15);
        watch.observe(7);
        assert_eq!(
            watch.on_intersection(&7, true, 0.05),
            RevealTransition::Unchanged
        );
        assert_eq!(watch.pending().count(), 1);
    }
}
