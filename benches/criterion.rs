#[macro_use]
extern crate criterion;

use criterion::Criterion;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sudoku_game::{Board, Difficulty, Grid};

fn _1_solve_empty_board(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("_1_solve_empty_board", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.solve(&mut rng);
            board
        })
    });
}

fn _2_solve_puzzle(c: &mut Criterion) {
    let line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
    let puzzle = Grid::from_str_line(line).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("_2_solve_puzzle", |b| {
        b.iter(|| {
            let mut board = Board::from_grid(&puzzle);
            board.solve(&mut rng);
            board
        })
    });
}

fn _3_generate_easy_game(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    c.bench_function("_3_generate_easy_game", |b| {
        b.iter(|| Board::new_game(Difficulty::Easy, &mut rng))
    });
}

fn _4_generate_hard_game(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    c.bench_function("_4_generate_hard_game", |b| {
        b.iter(|| Board::new_game(Difficulty::Hard, &mut rng))
    });
}

criterion_group!(
    benches,
    _1_solve_empty_board,
    _2_solve_puzzle,
    _3_generate_easy_game,
    _4_generate_hard_game
);
criterion_main!(benches);
