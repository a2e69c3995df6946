use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::time::Instant;

use itertools::Itertools;

use sudoku_checker::checker;
use sudoku_checker::Sudoku;

fn main() {
    env_logger::init();

    let path = env::args().nth(1).expect("Usage: check-grids <file of 81-character grid lines>");
    let file = File::open(&path).expect("Input file not present");
    let lines = BufReader::new(file).lines().map(|l| l.expect("Error reading from file"));
    let grids = lines.filter(|l| !l.is_empty()).map(|line| Sudoku::from_line(&line)).collect_vec();
    let n_grids = grids.len();

    let start_time = Instant::now();
    let mut n_solved = 0;
    for sudoku in &grids {
        let solved = checker::is_solved(sudoku);
        if solved { n_solved += 1; }
        println!(
            "{} {}",
            sudoku.digits().map(|d| if *d == 0 { '.' } else { char::from_digit(*d as u32, 10).unwrap() }).join(""),
            solved,
        );
    }
    let total_time = start_time.elapsed();

    println!("Checked {} grids ({} solved) in {:?}", n_grids, n_solved, total_time);
}
