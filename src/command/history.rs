use std::collections::VecDeque;

use crate::buffer::{PixelBuffer, Snapshot};
use crate::error::CanvasError;

/// Number of snapshots kept when no capacity is configured
pub const DEFAULT_CAPACITY: usize = 50;

/// Bounded log of canvas snapshots with an undo/redo cursor.
///
/// The entry under the cursor always matches the last committed state of the
/// canvas. Entries after the cursor are the redo branch; committing discards
/// them.
#[derive(Debug, Clone)]
pub struct History {
    /// Oldest first
    entries: VecDeque<Snapshot>,
    /// Position of the current entry
    index: usize,
    /// Maximum number of entries, at least 1
    capacity: usize,
}

impl History {
    /// Start a history whose only entry is `initial`.
    pub fn new(initial: Snapshot, capacity: usize) -> Self {
        let mut entries = VecDeque::with_capacity(capacity.clamp(1, DEFAULT_CAPACITY));
        entries.push_back(initial);
        Self {
            entries,
            index: 0,
            capacity: capacity.max(1),
        }
    }

    /// Record the current state of `buffer` as a new undo point
    pub fn commit(&mut self, buffer: &PixelBuffer) {
        // A new edit after an undo invalidates the redo branch
        self.entries.truncate(self.index + 1);
        self.entries.push_back(buffer.copy());
        self.index = self.entries.len() - 1;

        if self.entries.len() > self.capacity {
            self.entries.pop_front();
            self.index -= 1;
        }
        log::debug!(
            "commit: history index {} of {}",
            self.index,
            self.entries.len()
        );
    }

    /// Step back one entry and restore it into `buffer`.
    ///
    /// Returns `Ok(false)` when there is nothing earlier to go back to.
    pub fn undo(&mut self, buffer: &mut PixelBuffer) -> Result<bool, CanvasError> {
        if !self.can_undo() {
            log::debug!("nothing to undo");
            return Ok(false);
        }
        buffer.restore(&self.entries[self.index - 1])?;
        self.index -= 1;
        log::debug!("undo: history index {}", self.index);
        Ok(true)
    }

    /// Step forward one entry and restore it into `buffer`.
    ///
    /// Returns `Ok(false)` when already at the newest entry.
    pub fn redo(&mut self, buffer: &mut PixelBuffer) -> Result<bool, CanvasError> {
        if !self.can_redo() {
            log::debug!("nothing to redo");
            return Ok(false);
        }
        buffer.restore(&self.entries[self.index + 1])?;
        self.index += 1;
        log::debug!("redo: history index {}", self.index);
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// The snapshot under the cursor
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshots from oldest to newest
    pub fn entries(&self) -> impl Iterator<Item = &Snapshot> {
        self.entries.iter()
    }
}
