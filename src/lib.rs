//! Checking complete solutions of standard 9x9 Sudoku grids.
//!
//! The crate does one thing: given a 9x9 grid of integers, decide whether it
//! is a complete, correct solution - every row, every column, and every 3x3
//! box holding each of the digits 1-9 exactly once, with no empty cells. It
//! does not solve or generate puzzles, and it keeps no state between calls.
//!
//! ```
//! use sudoku_checker::is_valid_solution;
//!
//! let rows: Vec<Vec<i32>> = [
//!     "534678912", "672195348", "198342567",
//!     "859761423", "426853791", "713924856",
//!     "961537284", "287419635", "345286179",
//! ]
//! .iter()
//! .map(|row| row.chars().map(|c| c.to_digit(10).unwrap() as i32).collect())
//! .collect();
//!
//! assert_eq!(is_valid_solution(&rows), Ok(true));
//! ```
//!
//! Malformed input - a grid that is not 9x9, or a cell outside 0..=9 - is a
//! [`GridError`], distinct from the `Ok(false)` an incomplete or incorrect
//! grid gets.

pub mod checker;
pub mod digit_set;
pub mod error;
pub mod sudoku;

pub use checker::is_valid_solution;
pub use error::GridError;
pub use sudoku::Sudoku;
