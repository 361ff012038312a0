//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Stage Geometry
//!
//! The stage is a grid of `columns x rows` cells:
//!
//! - **Columns**: fixed by configuration (default 6, indexed left to right)
//! - **Rows**: derived from the available display height once, at construction
//!   (row 0 is the top)
//! - **Character row**: always `rows - CHARACTER_ROW_OFFSET`; the character never
//!   moves vertically, the world scrolls past it
//!
//! # Examples
//!
//! ```
//! use upstair_types::{Cell, Direction, StageAction, DEFAULT_COLUMNS};
//!
//! let cell = Cell::PLATFORM;
//! assert!(cell.is_platform);
//! assert!(!cell.has_character);
//!
//! assert_eq!(Direction::Left.offset(), -1);
//! assert_eq!(StageAction::MoveRight.direction(), Some(Direction::Right));
//!
//! assert_eq!(DEFAULT_COLUMNS, 6);
//! ```

/// Default number of stage columns.
pub const DEFAULT_COLUMNS: usize = 6;

/// Distance of the character row from the number of rows (`rows - 3`).
pub const CHARACTER_ROW_OFFSET: usize = 3;

/// Smallest usable column count.
///
/// The starting column is `columns / 2 + {0, 1}`, which only fits from three
/// columns up.
pub const MIN_COLUMNS: usize = 3;

/// Smallest usable row count: at least one row must sit above the character row.
pub const MIN_ROWS: usize = CHARACTER_ROW_OFFSET + 1;

/// Largest column count accepted from configuration.
///
/// Keeps the framed stage (three terminal columns per cell) well inside `u16`.
pub const MAX_COLUMNS: usize = 256;

/// Upper bound on `columns * rows` for one stage.
pub const MAX_CELLS: usize = 1 << 20;

/// Points awarded per successful move.
pub const POINTS_PER_MOVE: u32 = 1;

/// A single stage cell.
///
/// The two flags are independent: a platform may exist without the character,
/// and the character always stands on a platform in a well-formed stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    /// A platform occupies this cell.
    pub is_platform: bool,
    /// The character currently stands here.
    pub has_character: bool,
}

impl Cell {
    /// Nothing here.
    pub const EMPTY: Cell = Cell {
        is_platform: false,
        has_character: false,
    };

    /// Platform with nobody on it.
    pub const PLATFORM: Cell = Cell {
        is_platform: true,
        has_character: false,
    };

    /// Platform the character is standing on.
    pub const CHARACTER: Cell = Cell {
        is_platform: true,
        has_character: true,
    };
}

/// Horizontal hop direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for this direction (-1 or +1)
    pub fn offset(self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Commands issued by the presentation layer.
///
/// Moves resolve to either a hop or a restart depending on legality; the
/// engine itself never decides to restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageAction {
    /// Hop one column left (restart if there is no platform up-left)
    MoveLeft,
    /// Hop one column right (restart if there is no platform up-right)
    MoveRight,
    /// Rebuild the stage unconditionally
    Restart,
}

impl StageAction {
    /// The hop direction, if this action is a move.
    pub fn direction(self) -> Option<Direction> {
        match self {
            StageAction::MoveLeft => Some(Direction::Left),
            StageAction::MoveRight => Some(Direction::Right),
            StageAction::Restart => None,
        }
    }

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use upstair_types::StageAction;
    ///
    /// assert_eq!(StageAction::from_str("moveLeft"), Some(StageAction::MoveLeft));
    /// assert_eq!(StageAction::from_str("RESTART"), Some(StageAction::Restart));
    /// assert_eq!(StageAction::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(StageAction::MoveLeft),
            "moveright" => Some(StageAction::MoveRight),
            "restart" => Some(StageAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(self) -> &'static str {
        match self {
            StageAction::MoveLeft => "moveLeft",
            StageAction::MoveRight => "moveRight",
            StageAction::Restart => "restart",
        }
    }
}
