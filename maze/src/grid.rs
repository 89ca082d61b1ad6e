use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Errors reading or parsing a maze file.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("could not read maze file")]
    Io(#[from] std::io::Error),

    #[error("unknown tile {0:?}")]
    UnknownTile(char),

    #[error("row {row} has {got} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },

    #[error("maze file contains no tiles")]
    Empty,
}

/// A rectangular maze layout. Walls never change once the grid is built;
/// states hold a shared reference to it rather than copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    walls: Vec<bool>,
}

impl Grid {
    /// A grid with every cell open.
    pub fn open(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            walls: vec![false; width * height],
        }
    }

    /// A grid with every cell walled, the raw material for the carving
    /// generator.
    pub(crate) fn filled(width: usize, height: usize) -> Grid {
        Grid {
            width,
            height,
            walls: vec![true; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_wall(&self, row: usize, col: usize) -> bool {
        self.walls[row * self.width + col]
    }

    pub(crate) fn set_wall(&mut self, row: usize, col: usize, wall: bool) {
        self.walls[row * self.width + col] = wall;
    }

    /// Read a grid from a maze file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Grid, GridError> {
        fs::read_to_string(path)?.parse()
    }

    /// Write the grid to a maze file in the same textual form
    /// [FromStr] accepts.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GridError> {
        fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut walls = Vec::new();
        let mut width = 0;
        let mut height = 0;

        for line in s.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if height == 0 {
                width = line.chars().count();
            } else if line.chars().count() != width {
                return Err(GridError::RaggedRow {
                    row: height,
                    got: line.chars().count(),
                    expected: width,
                });
            }

            for tile in line.chars() {
                match tile {
                    '#' => walls.push(true),
                    '.' => walls.push(false),
                    other => return Err(GridError::UnknownTile(other)),
                }
            }
            height += 1;
        }

        if walls.is_empty() {
            return Err(GridError::Empty);
        }

        Ok(Grid {
            width,
            height,
            walls,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                write!(f, "{}", if self.is_wall(row, col) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_and_render_round_trip() {
        let text = "..#\n#..\n...\n";
        let grid: Grid = text.parse().unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(grid.is_wall(0, 2));
        assert!(grid.is_wall(1, 0));
        assert!(!grid.is_wall(2, 1));
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let grid: Grid = "\n..\n..\n\n".parse().unwrap();
        assert_eq!(grid.height(), 2);
    }

    #[test]
    fn unknown_tile_is_rejected() {
        match "..x".parse::<Grid>() {
            Err(GridError::UnknownTile('x')) => {}
            other => panic!("expected unknown tile error, got {:?}", other),
        }
    }

    #[test]
    fn ragged_rows_are_rejected() {
        match "...\n..".parse::<Grid>() {
            Err(GridError::RaggedRow {
                row: 1,
                got: 2,
                expected: 3,
            }) => {}
            other => panic!("expected ragged row error, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!("  \n \n".parse::<Grid>(), Err(GridError::Empty)));
    }

    #[test]
    fn save_and_load_round_trip() {
        let grid: Grid = "..#\n...\n".parse().unwrap();
        let path = std::env::temp_dir().join("maze-grid-round-trip.txt");

        grid.save(&path).unwrap();
        let loaded = Grid::load(&path).unwrap();
        assert_eq!(grid, loaded);

        fs::remove_file(path).unwrap();
    }
}
