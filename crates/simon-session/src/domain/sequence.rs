//! The sequence the player must reproduce
//!
//! Append-only during a game, cleared on reset. Entries are chosen uniformly
//! at random with replacement; repeats are allowed.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::signal::{SignalBank, SignalId};

/// Ordered list of signals for the current game
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    signals: Vec<SignalId>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<SignalId> {
        self.signals.get(position).copied()
    }

    pub fn as_slice(&self) -> &[SignalId] {
        &self.signals
    }

    pub fn iter(&self) -> impl Iterator<Item = SignalId> + '_ {
        self.signals.iter().copied()
    }

    pub fn clear(&mut self) {
        self.signals.clear();
    }

    /// Completed rounds: `len - 1`, saturating at zero for an empty sequence
    pub fn score(&self) -> u32 {
        self.signals.len().saturating_sub(1) as u32
    }

    pub(crate) fn push(&mut self, signal: SignalId) {
        self.signals.push(signal);
    }
}

/// Uniform random source of new sequence entries
pub struct SequenceGenerator {
    rng: StdRng,
}

impl SequenceGenerator {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator, for debugging sessions
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Append one signal chosen uniformly from the bank.
    ///
    /// Returns the appended id, or `None` if the bank is empty.
    pub fn extend(&mut self, sequence: &mut Sequence, bank: &SignalBank) -> Option<SignalId> {
        let ids: Vec<SignalId> = bank.ids().collect();
        let next = *ids.choose(&mut self.rng)?;
        sequence.push(next);
        Some(next)
    }
}

impl Default for SequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SequenceGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SequenceGenerator").finish_non_exhaustive()
    }
}
