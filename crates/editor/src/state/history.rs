//! Linear undo/redo history of part collection snapshots

use super::parts::PartCollection;

/// Default number of snapshots kept before the oldest are dropped
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Snapshot sequence with a cursor.
///
/// The cursor is `None` only while the history is empty; otherwise it is a
/// valid index. Pushing while the cursor is not at the end discards the redo
/// branch first.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<PartCollection>,
    cursor: Option<usize>,
    limit: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Empty history keeping at most `limit` snapshots
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
            limit: limit.max(1),
        }
    }

    /// Record a copy of `snapshot` after the cursor
    pub fn push(&mut self, snapshot: &PartCollection) {
        if let Some(cursor) = self.cursor {
            self.snapshots.truncate(cursor + 1);
        }
        self.snapshots.push(snapshot.clone());
        while self.snapshots.len() > self.limit {
            self.snapshots.remove(0);
        }
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Step back. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&PartCollection> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.snapshots.get(cursor - 1)
            }
            _ => None,
        }
    }

    /// Step forward. `None` when there is nothing to redo.
    pub fn redo(&mut self) -> Option<&PartCollection> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.snapshots.len() => {
                self.cursor = Some(cursor + 1);
                self.snapshots.get(cursor + 1)
            }
            _ => None,
        }
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.snapshots.len())
    }

    /// Replace the whole history with a single snapshot at cursor 0
    pub fn reset(&mut self, initial: PartCollection) {
        self.snapshots.clear();
        self.snapshots.push(initial);
        self.cursor = Some(0);
    }

    /// Snapshot under the cursor
    pub fn current(&self) -> Option<&PartCollection> {
        self.cursor.and_then(|c| self.snapshots.get(c))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn snapshots(&self) -> &[PartCollection] {
        &self.snapshots
    }
}
