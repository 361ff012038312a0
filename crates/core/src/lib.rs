//! Core stage logic - pure, deterministic, and testable
//!
//! This crate contains the stage generator and the movement state machine.
//! It has **no dependencies** on terminal I/O, so it is:
//!
//! - **Deterministic**: Same seed produces the same stage and the same new rows
//! - **Testable**: Every primitive (legality query, move, reset) works in isolation
//! - **Portable**: Any presentation layer can drive it and render its snapshot
//!
//! # Module Structure
//!
//! - [`stage`]: the grid, random-walk generation, legality queries and hops
//! - [`rng`]: seeded LCG and clock-derived seeds
//! - [`snapshot`]: read-only copy handed to renderers
//! - [`error`]: construction errors
//!
//! # Rules
//!
//! - The character stands three rows from the bottom and never moves vertically
//! - A hop goes one column left or right onto the platform one row up
//! - Every hop scores one point, scrolls the grid down and grows a new top row
//! - The engine never restarts on its own; callers compose legality + move + reset
//!
//! # Example
//!
//! ```
//! use upstair_core::Stage;
//! use upstair_types::Direction;
//!
//! let mut stage = Stage::new(6, 10, 12345).unwrap();
//!
//! let direction = if stage.can_move_left() {
//!     Direction::Left
//! } else {
//!     Direction::Right
//! };
//! assert!(stage.move_character(direction));
//! assert_eq!(stage.score(), 1);
//! ```

pub mod error;
pub mod rng;
pub mod snapshot;
pub mod stage;

pub use upstair_types as types;

// Re-export commonly used types for convenience
pub use error::StageError;
pub use rng::{clock_seed, mix_seed, SimpleRng};
pub use snapshot::StageSnapshot;
pub use stage::Stage;
