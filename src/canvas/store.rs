use crate::shape::ShapeRecord;

/// What an append did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Record stored; the board now holds this many shapes.
    Stored(usize),
    /// The append hit the cap: the whole sequence was cleared. The host layer
    /// should surface the restart notification exactly once per this outcome.
    Cleared,
}

/// Append-only sequence of shapes, insertion order = draw order, capped at a
/// maximum count. Reaching the cap empties the board before the next append,
/// so the length stays below the cap between calls.
#[derive(Debug, Clone)]
pub struct ShapeStore {
    records: Vec<ShapeRecord>,
    capacity: usize,
}

impl ShapeStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ShapeRecord] {
        &self.records
    }

    pub fn append(&mut self, record: ShapeRecord) -> AppendOutcome {
        self.records.push(record);
        if self.records.len() >= self.capacity {
            self.records.clear();
            tracing::debug!(capacity = self.capacity, "board full; cleared all shapes");
            AppendOutcome::Cleared
        } else {
            AppendOutcome::Stored(self.records.len())
        }
    }
}
