use log::debug;

use crate::digit_set::DigitSet;
use crate::error::GridError;
use crate::sudoku::{Sudoku, BOXES, COLS, ROWS};

/// Check whether caller-supplied rows form a complete, correct solution.
///
/// The rows must describe a 9x9 grid with every cell in 0..=9, otherwise a
/// [`GridError`] is returned. Given a well-formed grid, the result is
/// `Ok(true)` exactly when every row, every column, and every 3x3 box holds
/// the digits 1-9 once each; an incomplete or rule-violating grid is a normal
/// `Ok(false)`, never an error.
pub fn is_valid_solution(rows: &[Vec<i32>]) -> Result<bool, GridError> {
    let sudoku = Sudoku::try_from_rows(rows)?;
    Ok(is_solved(&sudoku))
}

/// Check an already-validated grid against the solution rules
pub fn is_solved(sudoku: &Sudoku) -> bool {
    units_complete(sudoku, &ROWS, "row")
        && units_complete(sudoku, &COLS, "column")
        && units_complete(sudoku, &BOXES, "box")
}

fn units_complete(sudoku: &Sudoku, units: &[[usize; 9]; 9], kind: &str) -> bool {
    units.iter().enumerate().all(|(unit_idx, unit)| {
        let mut seen = DigitSet::empty();
        for &idx in unit {
            let digit = sudoku[idx];
            if digit == 0 {
                debug!("{} {} has an empty cell", kind, unit_idx);
                return false;
            }
            if !seen.insert(digit) {
                debug!("{} {} holds {} more than once", kind, unit_idx, digit);
                return false;
            }
        }
        seen.is_complete()
    })
}
