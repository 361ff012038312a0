use std::fmt;

use crate::types::{MAX_CELLS, MIN_COLUMNS, MIN_ROWS};

/// Stage construction failures.
///
/// Moves never fail with an error: an illegal hop is a `false` legality query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    TooFewColumns { columns: usize },
    TooFewRows { rows: usize },
    /// `columns * rows` overflows or exceeds [`MAX_CELLS`].
    TooLarge { columns: usize, rows: usize },
}

impl StageError {
    pub fn code(self) -> &'static str {
        match self {
            StageError::TooFewColumns { .. } | StageError::TooFewRows { .. } => {
                "invalid_dimensions"
            }
            StageError::TooLarge { .. } => "stage_too_large",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StageError::TooFewColumns { .. } => "stage needs at least 3 columns",
            StageError::TooFewRows { .. } => "stage needs at least 4 rows",
            StageError::TooLarge { .. } => "stage has too many cells",
        }
    }
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            StageError::TooFewColumns { columns } => {
                write!(f, "{} (got {columns}, min {MIN_COLUMNS})", self.message())
            }
            StageError::TooFewRows { rows } => {
                write!(f, "{} (got {rows}, min {MIN_ROWS})", self.message())
            }
            StageError::TooLarge { columns, rows } => {
                write!(f, "{} ({columns}x{rows}, max {MAX_CELLS})", self.message())
            }
        }
    }
}

impl std::error::Error for StageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_value() {
        let err = StageError::TooFewRows { rows: 2 };
        assert_eq!(err.to_string(), "stage needs at least 4 rows (got 2, min 4)");
        assert_eq!(err.code(), "invalid_dimensions");
    }

    #[test]
    fn too_large_has_its_own_code() {
        let err = StageError::TooLarge { columns: 2048, rows: 1024 };
        assert_eq!(err.code(), "stage_too_large");
        assert!(err.to_string().starts_with("stage has too many cells (2048x1024"));
    }
}
