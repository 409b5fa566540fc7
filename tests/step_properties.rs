//! Properties of the step function over arbitrary boards.

use life_board::{Cell, Grid};
use proptest::prelude::*;

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..24, 1usize..24).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(any::<bool>(), rows * cols).prop_map(move |cells| {
            let mut grid = Grid::new(rows, cols);
            for (idx, alive) in cells.into_iter().enumerate() {
                grid.set(idx / cols, idx % cols, Cell::from_alive(alive));
            }
            grid
        })
    })
}

/// Neighbor count computed the slow, obvious way
fn naive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();
    let mut count = 0;
    for r in row.saturating_sub(1)..=(row + 1).min(rows - 1) {
        for c in col.saturating_sub(1)..=(col + 1).min(cols - 1) {
            if (r, c) != (row, col) && grid.is_alive(r, c) {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #[test]
    fn step_keeps_dimensions(grid in arb_grid()) {
        prop_assert_eq!(grid.step().dimensions(), grid.dimensions());
    }

    #[test]
    fn step_is_deterministic(grid in arb_grid()) {
        prop_assert_eq!(grid.step(), grid.step());
        prop_assert_eq!(grid.step(), grid.step_parallel());
    }

    #[test]
    fn step_applies_rule_to_pre_step_board(grid in arb_grid()) {
        let next = grid.step();
        for (row, col, cell) in grid.iter_cells() {
            let expected = cell.evolve(naive_neighbors(&grid, row, col));
            prop_assert_eq!(next.get(row, col), Some(expected));
        }
    }

    #[test]
    fn lone_cell_dies_anywhere(rows in 1usize..30, cols in 1usize..30, seed in any::<(usize, usize)>()) {
        let (row, col) = (seed.0 % rows, seed.1 % cols);
        let mut grid = Grid::new(rows, cols);
        grid.set(row, col, Cell::Alive);
        prop_assert!(grid.step().is_all_dead());
    }

    #[test]
    fn painting_twice_equals_painting_once(grid in arb_grid(), row in -3i32..30, col in -3i32..30) {
        let mut once = grid.clone();
        once.paint(row, col);
        let mut twice = once.clone();
        twice.paint(row, col);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn vertical_blinker_has_period_two() {
    let blinker = Grid::from_rows(&[
        ".....",
        "..#..",
        "..#..",
        "..#..",
        ".....",
    ])
    .unwrap();
    assert_ne!(blinker.step(), blinker);
    assert_eq!(blinker.step().step(), blinker);
}

#[test]
fn blinker_on_the_edge_does_not_wrap() {
    // Pinned to the top edge; a wrapping board would keep it oscillating
    let edge = Grid::from_rows(&[
        "###..",
        ".....",
        ".....",
        ".....",
    ])
    .unwrap();
    let next = edge.step();
    assert!(!next.is_alive(3, 1));
    assert_eq!(next.population(), 2);
}
