//! Pending Normal mode key sequence.
//!
//! After each keystroke the keymap is tried against the whole pending
//! sequence, then against it with the first key dropped, then with the first
//! two dropped. The sequence is cleared as soon as one of those lookups hits,
//! or once it holds `MAX_LEN` keys without a hit.

use crate::{Action, Keymap};
use smallvec::SmallVec;
use tracing::trace;

#[derive(Debug, Default, Clone)]
pub struct PendingSequence {
    keys: SmallVec<[char; PendingSequence::MAX_LEN]>,
}

impl PendingSequence {
    pub const MAX_LEN: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_string(&self) -> String {
        self.keys.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Push `key` and try to resolve. Returns the fired action, if any.
    pub fn feed(&mut self, key: char, keymap: &Keymap) -> Option<Action> {
        self.keys.push(key);
        let full = self.as_string();
        let resolved = full
            .char_indices()
            .take(self.keys.len())
            .find_map(|(offset, _)| {
                let suffix = &full[offset..];
                keymap.lookup(suffix).map(|a| (suffix.to_string(), a.clone()))
            });
        match resolved {
            Some((sequence, action)) => {
                trace!(target: "keymap", pending = %full, %sequence, action = action.name(), "sequence_match");
                self.keys.clear();
                Some(action)
            }
            None => {
                if self.keys.len() >= Self::MAX_LEN {
                    trace!(target: "keymap", pending = %full, "sequence_discarded");
                    self.keys.clear();
                }
                None
            }
        }
    }
}
