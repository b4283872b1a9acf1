//! Buffer Manager: the ordered set of open buffers plus the active index.
//!
//! Invariants:
//! * `buffers` is never empty.
//! * `active < buffers.len()` after every public call.
//!
//! Names are not required to be unique; lookups return the first match in
//! insertion order.

use core_text::Buffer;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct BufferManager {
    buffers: Vec<Buffer>,
    active: usize,
}

impl Default for BufferManager {
    fn default() -> Self {
        Self::new(Buffer::new("main"))
    }
}

impl BufferManager {
    pub fn new(initial: Buffer) -> Self {
        Self {
            buffers: vec![initial],
            active: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Buffer {
        &self.buffers[self.active]
    }

    pub fn active_mut(&mut self) -> &mut Buffer {
        &mut self.buffers[self.active]
    }

    /// Linear scan; first buffer carrying `name`.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.buffers.iter().position(|b| b.name == name)
    }

    /// Append `buffer` and make it active. Returns its index.
    pub fn push_active(&mut self, buffer: Buffer) -> usize {
        self.buffers.push(buffer);
        self.active = self.buffers.len() - 1;
        debug!(target: "state.buffers", index = self.active, name = %self.buffers[self.active].name, "buffer_added");
        self.active
    }

    /// Activate the buffer named `name`, creating an empty one when absent.
    /// Returns `true` when a new buffer was created.
    pub fn switch_or_create(&mut self, name: &str) -> bool {
        match self.find_by_name(name) {
            Some(idx) => {
                self.active = idx;
                debug!(target: "state.buffers", index = idx, name, "buffer_switched");
                false
            }
            None => {
                self.push_active(Buffer::new(name));
                true
            }
        }
    }

    /// Buffer names in insertion order, the active one wrapped in brackets.
    pub fn listing(&self) -> String {
        self.buffers
            .iter()
            .enumerate()
            .map(|(i, b)| {
                if i == self.active {
                    format!("[{}]", b.name)
                } else {
                    b.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_active_buffer() {
        let mgr = BufferManager::default();
        assert_eq!(mgr.len(), 1);
        assert_eq!(mgr.active_index(), 0);
        assert_eq!(mgr.active().name, "main");
    }

    #[test]
    fn switch_or_create_appends_then_reuses() {
        let mut mgr = BufferManager::default();
        assert!(mgr.switch_or_create("notes"));
        assert_eq!(mgr.active_index(), 1);
        assert!(!mgr.switch_or_create("main"));
        assert_eq!(mgr.active_index(), 0);
        assert!(!mgr.switch_or_create("notes"));
        assert_eq!(mgr.active_index(), 1);
        assert_eq!(mgr.len(), 2);
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let mut mgr = BufferManager::default();
        mgr.push_active(Buffer::new("dup"));
        mgr.push_active(Buffer::new("dup"));
        assert_eq!(mgr.find_by_name("dup"), Some(1));
        assert_eq!(mgr.find_by_name("missing"), None);
    }

    #[test]
    fn listing_marks_active() {
        let mut mgr = BufferManager::default();
        mgr.switch_or_create("b");
        assert_eq!(mgr.listing(), "main [b]");
    }
}
