use crate::document::Snapshot;

/// Snapshots taken before each stroke or clear, most recent last.
///
/// Depth is unbounded; entries are only ever removed by `pop`.
#[derive(Debug, Default)]
pub struct UndoStack {
    entries: Vec<Snapshot>,
}

impl UndoStack {
    /// Creates a new empty undo stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a snapshot taken immediately before a mutation
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot);
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
