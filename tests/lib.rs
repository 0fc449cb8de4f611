use rand::rngs::StdRng;
use rand::SeedableRng;

use sudoku_game::{Board, Cell, Difficulty, Digit, Grid};

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn solved_boards_are_valid() {
    for seed in 0..20 {
        let mut board = Board::new();
        assert!(board.solve(&mut rng(seed)));
        assert!(board.to_grid().is_solved());
        assert_eq!(board.solution(), Some(board.to_grid()));
    }
}

#[test]
fn solving_preserves_the_givens() {
    let line = "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";
    let puzzle = Grid::from_str_line(line).unwrap();

    let mut board = Board::from_grid(&puzzle);
    assert!(board.solve(&mut rng(1)));
    let solved = board.to_grid();
    assert!(solved.is_solved());
    for cell in Cell::all() {
        if let Some(digit) = puzzle.digit(cell) {
            assert_eq!(solved.digit(cell), Some(digit));
        }
    }

    // the puzzle is proper, so any search order finds the same solution
    let mut board = Board::from_grid(&puzzle);
    assert!(board.solve(&mut rng(99)));
    assert_eq!(board.to_grid(), solved);
}

#[test]
fn generated_games_mark_givens_as_fixed() {
    let board = Board::new_game(Difficulty::Easy, &mut rng(0));
    let solution = board.solution().unwrap();

    assert!(solution.is_solved());
    for cell in Cell::all() {
        assert_eq!(board.digit(cell).is_some(), board.is_fixed(cell));
        if let Some(digit) = board.digit(cell) {
            assert_eq!(solution.digit(cell), Some(digit));
        }
    }
    assert_eq!(board.givens(), board.to_grid());
    assert_eq!(board.n_givens(), board.to_grid().n_clues());
    assert!(!board.is_complete());
}

#[test]
fn generated_games_have_unique_solutions() {
    for seed in 0..3 {
        let board = Board::new_game(Difficulty::Medium, &mut rng(seed));
        let solution = board.solution().unwrap();

        // an exhaustive solver can only reproduce the recorded solution
        // if no second one exists
        let mut replay = Board::from_grid(&board.givens());
        assert!(replay.solve(&mut rng(seed + 100)));
        assert_eq!(replay.to_grid(), solution);
    }
}

// this test is probabilistic in nature
// if an error occurs, note down the grid that it generated
#[test]
fn difficulty_controls_the_number_of_givens() {
    let easy = Board::new_game(Difficulty::Easy, &mut rng(21));
    let medium = Board::new_game(Difficulty::Medium, &mut rng(21));
    let hard = Board::new_game(Difficulty::Hard, &mut rng(21));

    assert!(easy.n_givens() >= 36);
    assert!(medium.n_givens() >= 18);
    // digging every cell virtually always ends up below the easy preset
    assert!(
        hard.n_givens() < 36,
        "Digging left {} givens. Please save the grid for debugging:\n{}",
        hard.n_givens(),
        hard.givens().to_str_line()
    );
}

#[test]
fn completing_a_game() {
    let mut board = Board::new_game(Difficulty::Easy, &mut rng(3));
    let solution = board.solution().unwrap();

    let blanks: Vec<Cell> = Cell::all().filter(|&cell| board.digit(cell).is_none()).collect();
    for &cell in &blanks {
        assert!(!board.is_complete());
        board.enter(cell, solution.digit(cell).unwrap()).unwrap();
    }

    assert!(board.is_complete());
    assert_eq!(board.to_grid(), solution);
    assert!(board.to_grid().is_solved());
    assert_eq!(board.solution(), Some(solution));
}

#[test]
fn entries_can_be_cleared() {
    let mut board = Board::new_game(Difficulty::Easy, &mut rng(5));
    let givens = board.givens();

    let blanks: Vec<Cell> = Cell::all().filter(|&cell| board.digit(cell).is_none()).collect();
    assert!(blanks.len() >= 2);
    board.enter(blanks[0], Digit::new(1)).unwrap();
    board.enter(blanks[1], Digit::new(9)).unwrap();
    assert_eq!(board.to_grid().n_clues(), board.n_givens() + 2);

    board.clear_entries();
    assert_eq!(board.to_grid(), givens);
    assert_eq!(board.givens(), givens);
    assert!(!board.is_fixed(blanks[0]));
}

// this test is probabilistic in nature
#[test]
fn seeded_generation_is_reproducible() {
    let first = Board::new_game(Difficulty::Easy, &mut rng(42));
    let second = Board::new_game(Difficulty::Easy, &mut rng(42));
    assert_eq!(first, second);

    let other = Board::new_game(Difficulty::Easy, &mut rng(43));
    assert_ne!(
        first, other,
        "Two differently seeded games came out equal. This is possible, but very unlikely."
    );
}

// this test is probabilistic in nature
// if an error occurs, note down the grids that it generated
#[test]
fn random_solutions_are_diverse() {
    let mut rng = rand::thread_rng();
    let mut grids = vec![];
    for _ in 0..100 {
        let mut board = Board::new();
        assert!(board.solve(&mut rng));
        grids.push(board.to_grid());
    }
    grids.sort();

    let mut duplicates = vec![];
    for (i, pair) in grids.windows(2).enumerate() {
        if pair[0] == pair[1] {
            duplicates.push(i);
        }
    }

    if !duplicates.is_empty() {
        for i in duplicates {
            println!("grid nr {} and next: {}", i, grids[i].to_str_line());
        }
        panic!("\nRandomly solved an empty board into the above equal grid(s). This is possible, but very unlikely. Please save the grid(s) for debugging.");
    }
}

// Cells (r1, c1), (r1, c2), (r2, c1), (r2, c2) with crosswise equal digits
// and both columns in one stack can swap their two digits without breaking
// any house. Blanking three of them must make the fourth ambiguous.
#[test]
fn uniqueness_check_spots_swappable_rectangles() {
    let mut rng = rng(11);
    for _ in 0..20 {
        let mut board = Board::new();
        assert!(board.solve(&mut rng));
        let bytes = board.to_grid().to_bytes();
        let at = |row: usize, col: usize| bytes[row * 9 + col];

        for r1 in 0..9 {
            for r2 in r1 + 1..9 {
                for stack in 0..3 {
                    for c1 in 3 * stack..3 * stack + 3 {
                        for c2 in c1 + 1..3 * stack + 3 {
                            if at(r1, c1) != at(r2, c2) || at(r1, c2) != at(r2, c1) {
                                continue;
                            }
                            let mut puzzle = bytes;
                            puzzle[r1 * 9 + c1] = 0;
                            puzzle[r1 * 9 + c2] = 0;
                            puzzle[r2 * 9 + c1] = 0;
                            let puzzle = Grid::from_bytes(puzzle).unwrap();

                            let board = Board::from_grid(&puzzle);
                            let probe = Cell::from_coords(r2 as u8, c2 as u8);
                            assert!(!board.is_unique(probe, &mut rng));
                            return;
                        }
                    }
                }
            }
        }
    }
    panic!("Found no swappable rectangle in 20 random grids. This is possible, but very unlikely.");
}

#[cfg(feature = "serde")]
#[test]
fn grid_serde_roundtrip() {
    let mut board = Board::new();
    assert!(board.solve(&mut rng(13)));
    let grid = board.to_grid();

    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(json, format!("\"{}\"", grid.to_str_line()));
    let back: Grid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grid);
}
