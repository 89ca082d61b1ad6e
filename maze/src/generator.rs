//! Random maze generation by depth-first corridor carving.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;

const NEIGHBORS: [(i64, i64); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

/// Carve a random maze.
///
/// Cells start walled; each pass picks a random cell and carves a
/// depth-first corridor walk from it. A cell is only opened while it
/// borders exactly one corridor cell, which keeps passages one cell wide
/// instead of eroding into rooms. More passes mean more (and more
/// connected) corridors. The robot's entrance and exit corners are
/// always left open.
pub fn generate<R: Rng>(width: usize, height: usize, passes: usize, rng: &mut R) -> Grid {
    let mut grid = Grid::filled(width, height);

    for _ in 0..passes {
        let row = rng.gen_range(0..height) as i64;
        let col = rng.gen_range(0..width) as i64;
        carve(&mut grid, row, col, rng);
    }

    grid.set_wall(0, 0, false);
    grid.set_wall(height - 1, width - 1, false);

    grid
}

fn carve<R: Rng>(grid: &mut Grid, row: i64, col: i64, rng: &mut R) {
    let mut trail = vec![(row, col)];
    grid.set_wall(row as usize, col as usize, false);

    while let Some(&(row, col)) = trail.last() {
        let mut steps = NEIGHBORS;
        steps.shuffle(rng);

        let mut extended = false;
        for &(dr, dc) in steps.iter() {
            let (next_row, next_col) = (row + dr, col + dc);
            if !inside(grid, next_row, next_col)
                || !grid.is_wall(next_row as usize, next_col as usize)
            {
                continue;
            }
            if open_neighbors(grid, next_row, next_col) == 1 {
                grid.set_wall(next_row as usize, next_col as usize, false);
                trail.push((next_row, next_col));
                extended = true;
                break;
            }
        }

        // Dead end: back up one cell and try again from there.
        if !extended {
            trail.pop();
        }
    }
}

fn open_neighbors(grid: &Grid, row: i64, col: i64) -> usize {
    NEIGHBORS
        .iter()
        .filter(|&&(dr, dc)| {
            let (r, c) = (row + dr, col + dc);
            inside(grid, r, c) && !grid.is_wall(r as usize, c as usize)
        })
        .count()
}

fn inside(grid: &Grid, row: i64, col: i64) -> bool {
    row >= 0 && col >= 0 && (row as usize) < grid.height() && (col as usize) < grid.width()
}
