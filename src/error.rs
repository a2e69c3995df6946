use thiserror::Error;

/// Contract violations in the grid handed to the checker. A grid that is the
/// right shape with in-range values never errors, however wrong it is as a
/// solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid is not exactly 9x9. `cols` carries the length of the first
    /// offending row when the row count itself is 9.
    #[error("grid is not 9x9 ({rows} rows, row width {cols:?})")]
    InvalidShape { rows: usize, cols: Option<usize> },

    /// A cell holds a value outside 0..=9.
    #[error("cell ({row}, {col}) holds {value}, outside 0..=9")]
    InvalidValue { row: usize, col: usize, value: i32 },
}
