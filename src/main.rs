use std::env;
use std::process;

use sudoku_game::{Board, Difficulty};

fn main() {
    let difficulty = match env::args().nth(1) {
        Some(arg) => match arg.parse::<Difficulty>() {
            Ok(difficulty) => difficulty,
            Err(err) => {
                eprintln!("{}", err);
                eprintln!("usage: sudoku-game [easy|medium|hard]");
                process::exit(1);
            }
        },
        None => Difficulty::Medium,
    };

    let mut rng = rand::thread_rng();
    let board = Board::new_game(difficulty, &mut rng);

    println!("{}", board.to_grid());
    println!();
    println!("puzzle:   {}", board.to_grid().to_str_line());
    if let Some(solution) = board.solution() {
        println!("solution: {}", solution.to_str_line());
    }
}
