//! Dense slot matrix for reconstructing pasted tables

/// State of one slot of the data matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Not written yet
    Vacant,
    /// Covered by a merged region anchored elsewhere
    Merged,
    /// Holds a cell value
    Value(String),
}

/// Row-major `rows × cols` matrix of slots
#[derive(Debug, Clone)]
pub struct DataMatrix {
    slots: Vec<Vec<Slot>>,
    cols: usize,
}

impl DataMatrix {
    /// Allocate a matrix of vacant slots
    pub fn new(rows: usize, cols: usize) -> Self {
        DataMatrix {
            slots: vec![vec![Slot::Vacant; cols]; rows],
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.slots.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Slot at `(row, col)`, if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&Slot> {
        self.slots.get(row)?.get(col)
    }

    /// First vacant slot of a row.
    ///
    /// This is a scan, not a cursor: merges from earlier rows may already
    /// have claimed slots further right.
    pub fn first_vacant(&self, row: usize) -> Option<usize> {
        self.slots
            .get(row)?
            .iter()
            .position(|slot| *slot == Slot::Vacant)
    }

    /// Number of vacant slots left in a row
    pub fn vacant_count(&self, row: usize) -> usize {
        self.slots
            .get(row)
            .map_or(0, |cells| cells.iter().filter(|s| **s == Slot::Vacant).count())
    }

    /// Mark the region anchored at `(row, col)` as merged, clipped to the
    /// matrix. Returns `true` when the region had to be clipped.
    pub fn mark_merged(&mut self, row: usize, col: usize, rowspan: usize, colspan: usize) -> bool {
        let row_end = (row + rowspan).min(self.rows());
        let col_end = (col + colspan).min(self.cols);

        for cells in &mut self.slots[row.min(row_end)..row_end] {
            for slot in &mut cells[col.min(col_end)..col_end] {
                *slot = Slot::Merged;
            }
        }

        row_end < row + rowspan || col_end < col + colspan
    }

    /// Write a value; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, col: usize, value: String) {
        if let Some(slot) = self.slots.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            *slot = Slot::Value(value);
        }
    }

    /// Convert into descriptor data: merged slots become `None`, vacant ones empty strings
    pub fn into_data(self) -> Vec<Vec<Option<String>>> {
        self.slots
            .into_iter()
            .map(|cells| {
                cells
                    .into_iter()
                    .map(|slot| match slot {
                        Slot::Vacant => Some(String::new()),
                        Slot::Merged => None,
                        Slot::Value(v) => Some(v),
                    })
                    .collect()
            })
            .collect()
    }
}
