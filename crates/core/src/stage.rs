//! Stage module - generator, mover and query surface over the platform grid
//!
//! The grid is `columns x rows` cells stored row-major in one flat buffer.
//! Row 0 is the top. The character always stands on `rows - 3`; a hop marks the
//! target platform, scrolls every row down by one and grows a new random
//! platform row at the top.
//!
//! Each row above the character holds a single platform whose column is one
//! step of a random walk from the row below, so there is always exactly one
//! reachable platform ahead.

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::error::StageError;
use crate::rng::{clock_seed, SimpleRng};
use crate::snapshot::StageSnapshot;
use crate::types::{
    Cell, Direction, CHARACTER_ROW_OFFSET, MAX_CELLS, MIN_COLUMNS, MIN_ROWS, POINTS_PER_MOVE,
};

/// Engine state for one stage.
#[derive(Debug, Clone)]
pub struct Stage {
    columns: usize,
    rows: usize,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Cell>,
    character_column: usize,
    /// Platform column of row 0, the seed for the next generated row.
    top_platform: usize,
    score: u32,
    /// Seed of the current episode.
    seed: u32,
    /// Monotonic episode id (increments on every reset after construction).
    episode_id: u32,
    rng: SimpleRng,
}

impl Stage {
    /// Build a fresh stage.
    pub fn new(columns: usize, rows: usize, seed: u32) -> Result<Self, StageError> {
        if columns < MIN_COLUMNS {
            return Err(StageError::TooFewColumns { columns });
        }
        if rows < MIN_ROWS {
            return Err(StageError::TooFewRows { rows });
        }
        let len = columns
            .checked_mul(rows)
            .filter(|&len| len <= MAX_CELLS)
            .ok_or(StageError::TooLarge { columns, rows })?;

        let mut stage = Self {
            columns,
            rows,
            cells: vec![Cell::EMPTY; len],
            character_column: 0,
            top_platform: 0,
            score: 0,
            seed,
            episode_id: 0,
            rng: SimpleRng::new(seed),
        };
        stage.build(seed);
        Ok(stage)
    }

    /// Rebuild the whole stage with a clock-derived seed.
    pub fn reset(&mut self) {
        self.reset_with_seed(clock_seed());
    }

    /// Rebuild the whole stage from `seed`, keeping the dimensions.
    pub fn reset_with_seed(&mut self, seed: u32) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.build(seed);
    }

    fn build(&mut self, seed: u32) {
        self.seed = seed;
        self.rng = SimpleRng::new(seed);
        self.cells.fill(Cell::EMPTY);

        // Integer division: even column counts lean right. Kept on purpose.
        self.character_column = self.columns / 2 + usize::from(self.rng.next_bool());
        let character_row = self.character_row();
        self.set(character_row, self.character_column, Cell::CHARACTER);

        let mut column = self.character_column;
        for y in (0..character_row).rev() {
            column = self.next_platform_column(column);
            self.set(y, column, Cell::PLATFORM);
        }
        self.top_platform = column;
        self.score = 0;

        debug!(
            seed,
            episode_id = self.episode_id,
            columns = self.columns,
            rows = self.rows,
            character_column = self.character_column,
            "stage reset"
        );
    }

    /// One random-walk step from the platform column of the row below.
    ///
    /// Edge columns are forced inward; anything else goes left or right with
    /// equal odds. Advances the stage RNG.
    pub fn next_platform_column(&mut self, previous: usize) -> usize {
        if previous == 0 {
            1
        } else if previous >= self.columns - 1 {
            self.columns - 2
        } else if self.rng.next_bool() {
            previous + 1
        } else {
            previous - 1
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Fixed row the character stands on.
    pub fn character_row(&self) -> usize {
        self.rows - CHARACTER_ROW_OFFSET
    }

    pub fn character_column(&self) -> usize {
        self.character_column
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    #[inline(always)]
    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row * self.columns + column)
    }

    /// Get cell at (row, column). Returns None if out of bounds
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.index(row, column).map(|idx| self.cells[idx])
    }

    fn set(&mut self, row: usize, column: usize, cell: Cell) {
        if let Some(idx) = self.index(row, column) {
            self.cells[idx] = cell;
        }
    }

    /// One row, left to right. Empty if out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= self.rows {
            return &[];
        }
        let start = y * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Column of the first platform in `row`, if any.
    pub fn platform_column(&self, row: usize) -> Option<usize> {
        self.row(row).iter().position(|cell| cell.is_platform)
    }

    fn target_column(&self, direction: Direction) -> Option<usize> {
        self.character_column
            .checked_add_signed(direction.offset())
            .filter(|&column| column < self.columns)
    }

    /// True if the character may hop one column in `direction`.
    ///
    /// The character must not be on that boundary column and the cell one row
    /// up in that direction must be a platform.
    pub fn can_move(&self, direction: Direction) -> bool {
        let Some(target) = self.target_column(direction) else {
            return false;
        };
        self.cell(self.character_row() - 1, target)
            .is_some_and(|cell| cell.is_platform)
    }

    pub fn can_move_left(&self) -> bool {
        self.can_move(Direction::Left)
    }

    pub fn can_move_right(&self) -> bool {
        self.can_move(Direction::Right)
    }

    /// All directions that are currently legal.
    pub fn legal_moves(&self) -> ArrayVec<Direction, 2> {
        [Direction::Left, Direction::Right]
            .into_iter()
            .filter(|&direction| self.can_move(direction))
            .collect()
    }

    /// Hop one column in `direction`, scroll the world and grow a new top row.
    ///
    /// Callers check [`Stage::can_move`] first. An illegal hop leaves the stage
    /// untouched and returns false; it never resets.
    pub fn move_character(&mut self, direction: Direction) -> bool {
        let target = match self.target_column(direction) {
            Some(target) if self.can_move(direction) => target,
            _ => return false,
        };

        let character_row = self.character_row();
        self.set(character_row - 1, target, Cell::CHARACTER);
        self.set(character_row, self.character_column, Cell::PLATFORM);

        // Scroll down one row; the old bottom row falls off.
        let width = self.columns;
        let last = self.cells.len() - width;
        self.cells.copy_within(0..last, width);

        // Chain off the pre-scroll top row, which is now row 1.
        let next = self.next_platform_column(self.top_platform);
        self.cells[..width].fill(Cell::EMPTY);
        self.set(0, next, Cell::PLATFORM);
        self.top_platform = next;

        self.character_column = target;
        self.score += POINTS_PER_MOVE;

        trace!(
            direction = direction.as_str(),
            character_column = self.character_column,
            score = self.score,
            top_platform = next,
            "character moved"
        );
        true
    }

    /// Copy the stage into an existing snapshot, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut StageSnapshot) {
        out.columns = self.columns;
        out.rows = self.rows;
        out.character_row = self.character_row();
        out.character_column = self.character_column;
        out.score = self.score;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.cells.clear();
        out.cells.extend_from_slice(&self.cells);
    }

    pub fn snapshot(&self) -> StageSnapshot {
        let mut out = StageSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Overwrite the grid for tests. Row 0 must hold exactly one platform.
    #[cfg(test)]
    fn load(&mut self, rows: &[&str], character_column: usize) {
        assert_eq!(rows.len(), self.rows);
        for (y, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), self.columns);
            for (x, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' => Cell::PLATFORM,
                    '@' => Cell::CHARACTER,
                    _ => Cell::EMPTY,
                };
                self.set(y, x, cell);
            }
        }
        self.character_column = character_column;
        self.top_platform = self.platform_column(0).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platforms_in(stage: &Stage, row: usize) -> usize {
        stage.row(row).iter().filter(|c| c.is_platform).count()
    }

    #[test]
    fn rejects_tiny_dimensions() {
        assert_eq!(
            Stage::new(2, 10, 1).unwrap_err(),
            StageError::TooFewColumns { columns: 2 }
        );
        assert_eq!(
            Stage::new(6, 3, 1).unwrap_err(),
            StageError::TooFewRows { rows: 3 }
        );
        assert!(Stage::new(3, 4, 1).is_ok());
    }

    #[test]
    fn rejects_oversized_grids_without_panicking() {
        assert_eq!(
            Stage::new(usize::MAX / 2, 4, 1).unwrap_err(),
            StageError::TooLarge {
                columns: usize::MAX / 2,
                rows: 4
            }
        );
        assert!(matches!(
            Stage::new(MAX_CELLS, 4, 1),
            Err(StageError::TooLarge { .. })
        ));
        assert!(Stage::new(MAX_CELLS / 4, 4, 1).is_ok());
    }

    #[test]
    fn reset_places_character_on_platform() {
        let stage = Stage::new(6, 10, 12345).unwrap();
        assert_eq!(stage.character_row(), 7);
        assert!((3..=4).contains(&stage.character_column()));
        assert_eq!(
            stage.cell(7, stage.character_column()),
            Some(Cell::CHARACTER)
        );
        assert_eq!(stage.score(), 0);
    }

    #[test]
    fn reset_leaves_rows_below_character_empty() {
        let stage = Stage::new(6, 10, 3).unwrap();
        for y in 8..10 {
            assert_eq!(platforms_in(&stage, y), 0);
        }
    }

    #[test]
    fn walk_is_forced_inward_at_edges() {
        let mut stage = Stage::new(6, 10, 1).unwrap();
        for _ in 0..50 {
            assert_eq!(stage.next_platform_column(0), 1);
            assert_eq!(stage.next_platform_column(5), 4);
        }
    }

    #[test]
    fn walk_steps_by_one_in_the_middle() {
        let mut stage = Stage::new(6, 10, 1).unwrap();
        let mut seen_left = false;
        let mut seen_right = false;
        for _ in 0..200 {
            match stage.next_platform_column(2) {
                1 => seen_left = true,
                3 => seen_right = true,
                other => panic!("unexpected column {other}"),
            }
        }
        assert!(seen_left && seen_right);
    }

    #[test]
    fn boundary_blocks_moves_regardless_of_grid() {
        let mut stage = Stage::new(4, 5, 1).unwrap();
        stage.load(&["#...", "####", "@...", "....", "...."], 0);
        assert!(!stage.can_move_left());
        assert!(stage.can_move_right());

        stage.load(&["...#", "####", "...@", "....", "...."], 3);
        assert!(!stage.can_move_right());
        assert!(stage.can_move_left());
    }

    #[test]
    fn illegal_move_is_rejected_without_mutation() {
        let mut stage = Stage::new(4, 5, 1).unwrap();
        stage.load(&[".#..", "..#.", ".@..", "....", "...."], 1);
        let before = stage.snapshot();

        assert!(!stage.can_move_left());
        assert!(!stage.move_character(Direction::Left));
        assert_eq!(stage.snapshot(), before);
    }

    #[test]
    fn move_scrolls_and_regenerates_top_row() {
        let mut stage = Stage::new(4, 5, 9).unwrap();
        stage.load(&[".#..", "..#.", ".@..", "#...", "...#"], 1);

        assert_eq!(stage.legal_moves().as_slice(), &[Direction::Right]);
        assert!(stage.move_character(Direction::Right));

        assert_eq!(stage.character_column(), 2);
        assert_eq!(stage.score(), 1);
        // Old row 0 moved to row 1, untouched.
        assert_eq!(stage.row(1), &[Cell::EMPTY, Cell::PLATFORM, Cell::EMPTY, Cell::EMPTY]);
        // Character now on the scrolled-down target.
        assert_eq!(stage.cell(2, 2), Some(Cell::CHARACTER));
        // Previous standing platform kept, character cleared.
        assert_eq!(stage.cell(3, 1), Some(Cell::PLATFORM));
        // Old bottom row is gone; old row 3 took its place.
        assert_eq!(stage.row(4), &[Cell::PLATFORM, Cell::EMPTY, Cell::EMPTY, Cell::EMPTY]);
        // New row 0 chains off the old top platform at column 1.
        let top = stage.platform_column(0).unwrap();
        assert!(top == 0 || top == 2);
        assert_eq!(platforms_in(&stage, 0), 1);
        assert!(stage.row(0).iter().all(|c| !c.has_character));
    }

    #[test]
    fn reset_with_seed_is_deterministic_and_counts_episodes() {
        let a = Stage::new(6, 12, 77).unwrap();
        let mut b = Stage::new(6, 12, 1).unwrap();
        b.reset_with_seed(77);

        assert_eq!(b.episode_id(), 1);
        assert_eq!(a.snapshot().cells, b.snapshot().cells);
        assert_eq!(b.seed(), 77);
    }

    #[test]
    fn snapshot_into_reuses_buffer() {
        let stage = Stage::new(6, 10, 5).unwrap();
        let mut snap = StageSnapshot::default();
        stage.snapshot_into(&mut snap);
        let capacity = snap.cells.capacity();
        stage.snapshot_into(&mut snap);
        assert_eq!(snap.cells.capacity(), capacity);
        assert_eq!(snap, stage.snapshot());
    }
}
