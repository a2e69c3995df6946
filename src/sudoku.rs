use std::ops::Index;

use crate::error::GridError;

/// A 9x9 grid in row-major order, with 0 denoting an empty cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku(pub [u8; 81]);

/// Flat indices of the cells of each row
pub const ROWS: [[usize; 9]; 9] = build_rows();

/// Flat indices of the cells of each column
pub const COLS: [[usize; 9]; 9] = build_cols();

/// Flat indices of the cells of each 3x3 box, left-to-right then top-to-bottom
pub const BOXES: [[usize; 9]; 9] = build_boxes();

impl Sudoku {
    #[inline(always)]
    pub fn empty() -> Self {
        Self([0; 81])
    }

    /// Build a grid from caller-supplied rows, checking that they form a 9x9
    /// grid whose cells all lie in 0..=9. Emptiness and rule violations are
    /// not errors here - they belong to the solution check.
    pub fn try_from_rows(rows: &[Vec<i32>]) -> Result<Self, GridError> {
        if rows.len() != 9 {
            return Err(GridError::InvalidShape { rows: rows.len(), cols: None });
        }
        for (r, row) in rows.iter().enumerate() {
            if row.len() != 9 {
                return Err(GridError::InvalidShape { rows: rows.len(), cols: Some(row.len()) });
            }
            for (c, &value) in row.iter().enumerate() {
                if !(0..=9).contains(&value) {
                    return Err(GridError::InvalidValue { row: r, col: c, value });
                }
            }
        }

        let mut result = [0; 81];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                result[9 * r + c] = value as u8;
            }
        }
        Ok(Self(result))
    }

    /// Read a grid from its one-line form - one decimal digit per cell, with
    /// any non-digit character standing for an empty cell. Characters past
    /// the 81st are ignored.
    pub fn from_line(s: &str) -> Self {
        let mut result = [0; 81];
        for (idx, c) in s.chars().take(81).enumerate() {
            result[idx] = c.to_digit(10).map(|v| v as u8).unwrap_or(0);
        }
        Self(result)
    }

    pub fn digits(&self) -> impl Iterator<Item = &u8> {
        self.0.iter()
    }
}

impl Index<usize> for Sudoku {
    type Output = u8;

    #[inline(always)]
    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl Index<(usize, usize)> for Sudoku {
    type Output = u8;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &u8 {
        &self.0[9 * r + c]
    }
}

const fn build_rows() -> [[usize; 9]; 9] {
    let mut units = [[0; 9]; 9];
    let mut r = 0;
    while r < 9 {
        let mut c = 0;
        while c < 9 {
            units[r][c] = 9 * r + c;
            c += 1;
        }
        r += 1;
    }
    units
}

const fn build_cols() -> [[usize; 9]; 9] {
    let mut units = [[0; 9]; 9];
    let mut c = 0;
    while c < 9 {
        let mut r = 0;
        while r < 9 {
            units[c][r] = 9 * r + c;
            r += 1;
        }
        c += 1;
    }
    units
}

const fn build_boxes() -> [[usize; 9]; 9] {
    let mut units = [[0; 9]; 9];
    let mut b = 0;
    while b < 9 {
        let (first_row, first_col) = (3 * (b / 3), 3 * (b % 3));
        let mut i = 0;
        while i < 9 {
            units[b][i] = 9 * (first_row + i / 3) + (first_col + i % 3);
            i += 1;
        }
        b += 1;
    }
    units
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_tables_cover_every_cell_three_times() {
        let mut seen = [0usize; 81];
        for units in [&ROWS, &COLS, &BOXES] {
            for unit in units {
                for &idx in unit {
                    seen[idx] += 1;
                }
            }
        }
        assert!(seen.iter().all(|&count| count == 3));
    }

    #[test]
    fn box_tables_follow_reading_order() {
        assert_eq!(BOXES[0], [0, 1, 2, 9, 10, 11, 18, 19, 20]);
        assert_eq!(BOXES[5], [33, 34, 35, 42, 43, 44, 51, 52, 53]);
        assert_eq!(BOXES[8], [60, 61, 62, 69, 70, 71, 78, 79, 80]);
    }

    #[test]
    fn try_from_rows_accepts_a_well_formed_grid() {
        let rows: Vec<Vec<i32>> = (0..9).map(|_| (1..=9).collect()).collect();
        let sudoku = Sudoku::try_from_rows(&rows).unwrap();
        assert_eq!(sudoku[(3, 0)], 1);
        assert_eq!(sudoku[(3, 8)], 9);
    }

    #[test]
    fn try_from_rows_rejects_wrong_row_count() {
        let rows: Vec<Vec<i32>> = (0..8).map(|_| vec![0; 9]).collect();
        assert_eq!(
            Sudoku::try_from_rows(&rows),
            Err(GridError::InvalidShape { rows: 8, cols: None }),
        );
    }

    #[test]
    fn try_from_rows_rejects_short_row() {
        let mut rows: Vec<Vec<i32>> = (0..9).map(|_| vec![0; 9]).collect();
        rows[4] = vec![0; 8];
        assert_eq!(
            Sudoku::try_from_rows(&rows),
            Err(GridError::InvalidShape { rows: 9, cols: Some(8) }),
        );
    }

    #[test]
    fn try_from_rows_rejects_out_of_range_values() {
        let mut rows: Vec<Vec<i32>> = (0..9).map(|_| vec![0; 9]).collect();
        rows[2][7] = 10;
        assert_eq!(
            Sudoku::try_from_rows(&rows),
            Err(GridError::InvalidValue { row: 2, col: 7, value: 10 }),
        );

        rows[2][7] = -1;
        assert_eq!(
            Sudoku::try_from_rows(&rows),
            Err(GridError::InvalidValue { row: 2, col: 7, value: -1 }),
        );
    }

    #[test]
    fn from_line_reads_digits_and_blanks() {
        let sudoku = Sudoku::from_line("534.781..");
        assert_eq!(sudoku[(0, 0)], 5);
        assert_eq!(sudoku[(0, 3)], 0);
        assert_eq!(sudoku[(0, 5)], 8);
        assert_eq!(sudoku[(0, 7)], 0);
        assert_eq!(sudoku[(1, 0)], 0);
    }
}
