use crate::types::Cell;

/// Read-only copy of a stage, taken after each mutation for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StageSnapshot {
    pub columns: usize,
    pub rows: usize,
    pub character_row: usize,
    pub character_column: usize,
    pub score: u32,
    pub episode_id: u32,
    pub seed: u32,
    /// Row-major cells, `rows * columns` long.
    pub cells: Vec<Cell>,
}

impl StageSnapshot {
    pub fn clear(&mut self) {
        self.columns = 0;
        self.rows = 0;
        self.character_row = 0;
        self.character_column = 0;
        self.score = 0;
        self.episode_id = 0;
        self.seed = 0;
        self.cells.clear();
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cells.get(row * self.columns + column).copied()
    }

    /// One row, left to right. Empty if out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.rows {
            return &[];
        }
        let start = y * self.columns;
        self.cells.get(start..start + self.columns).unwrap_or(&[])
    }

    /// Rows from top (index 0) to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.columns.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_snapshot_has_no_rows() {
        let snap = StageSnapshot::default();
        assert_eq!(snap.iter_rows().count(), 0);
        assert!(snap.row(0).is_empty());
        assert_eq!(snap.cell(0, 0), None);
    }

    #[test]
    fn row_access_is_row_major() {
        let mut snap = StageSnapshot {
            columns: 3,
            rows: 2,
            cells: vec![Cell::EMPTY; 6],
            ..StageSnapshot::default()
        };
        snap.cells[4] = Cell::PLATFORM;

        assert_eq!(snap.row(1), &[Cell::EMPTY, Cell::PLATFORM, Cell::EMPTY]);
        assert_eq!(snap.cell(1, 1), Some(Cell::PLATFORM));
        assert_eq!(snap.iter_rows().count(), 2);
    }

    #[test]
    fn short_cell_buffer_yields_empty_rows() {
        let snap = StageSnapshot {
            columns: 3,
            rows: 4,
            cells: vec![Cell::PLATFORM; 5],
            ..StageSnapshot::default()
        };
        assert_eq!(snap.row(0).len(), 3);
        assert!(snap.row(1).is_empty());
        assert!(snap.row(3).is_empty());
        assert_eq!(snap.cell(1, 2), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut snap = StageSnapshot {
            columns: 3,
            rows: 1,
            score: 9,
            cells: vec![Cell::PLATFORM; 3],
            ..StageSnapshot::default()
        };
        snap.clear();
        assert_eq!(snap, StageSnapshot::default());
    }
}
