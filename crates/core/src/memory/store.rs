//! Bounded associative response store.

use rand::Rng;
use std::collections::{BTreeMap, VecDeque};

/// Maximum number of responses remembered per associative key.
pub const MAX_RESPONSES_PER_KEY: usize = 10;

/// Maps associative keys to the responses recorded under them.
///
/// Invariants:
/// - every stored key has at least one response;
/// - no key holds more than [`MAX_RESPONSES_PER_KEY`] responses, the oldest
///   being evicted first;
/// - responses under a key keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMemory {
    slots: BTreeMap<String, VecDeque<String>>,
}

impl ResponseMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a memory from a plain map, enforcing the store invariants.
    ///
    /// Empty lists are dropped and over-long lists keep their newest
    /// [`MAX_RESPONSES_PER_KEY`] entries.
    pub fn from_map(map: BTreeMap<String, Vec<String>>) -> Self {
        let slots = map
            .into_iter()
            .filter(|(_, responses)| !responses.is_empty())
            .map(|(key, responses)| {
                let skip = responses.len().saturating_sub(MAX_RESPONSES_PER_KEY);
                (key, responses.into_iter().skip(skip).collect())
            })
            .collect();
        Self { slots }
    }

    /// Export the memory as a plain map.
    pub fn to_map(&self) -> BTreeMap<String, Vec<String>> {
        self.slots
            .iter()
            .map(|(key, responses)| (key.clone(), responses.iter().cloned().collect()))
            .collect()
    }

    /// Append `response` under `key`, evicting the oldest entry on overflow.
    pub fn record(&mut self, key: impl Into<String>, response: impl Into<String>) {
        let slot = self.slots.entry(key.into()).or_default();
        slot.push_back(response.into());
        while slot.len() > MAX_RESPONSES_PER_KEY {
            slot.pop_front();
        }
    }

    /// Pick one of the responses stored under `key`, uniformly at random.
    pub fn recall<R: Rng>(&self, key: &str, rng: &mut R) -> Option<&str> {
        let slot = self.slots.get(key)?;
        if slot.is_empty() {
            return None;
        }
        let index = rng.random_range(0..slot.len());
        slot.get(index).map(String::as_str)
    }

    /// Responses stored under `key`, oldest first.
    pub fn responses(&self, key: &str) -> impl Iterator<Item = &str> {
        self.slots
            .get(key)
            .into_iter()
            .flat_map(|slot| slot.iter().map(String::as_str))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
