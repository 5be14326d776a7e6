use crate::cell::{from_char, Cell};
use crate::error::EngineError;
use crossterm::{
    execute,
    style::{Color, Print, SetForegroundColor},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::io::{stdout, Write};

/// A square matrix of cells with hard, non-toroidal edges.
///
/// `Clone` produces a deep, independent copy and `==` compares size and
/// every cell, which is how the engine detects a steady state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid of the given side length.
    ///
    /// # Arguments
    /// * `size` - The side length of the grid. Must be greater than zero.
    pub fn new(size: usize) -> Result<Grid, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidSize);
        }

        Ok(Grid {
            size,
            cells: vec![Cell::Dead; size * size],
        })
    }

    /// Parses a grid from its text representation.
    ///
    /// The format is a `size N` header followed by `N` rows of `m ` lines,
    /// each holding `N` characters where `.` is a dead cell and `o` a live
    /// one. See the `patterns` module for examples.
    ///
    /// # Arguments
    /// * `contents` - The text representation of the grid.
    pub fn parse(contents: &str) -> Result<Grid, EngineError> {
        let size = Regex::new(r"size (\d+)")
            .unwrap()
            .captures(contents)
            .and_then(|captures| captures.get(1))
            .ok_or_else(|| EngineError::InvalidPattern("missing `size` header".to_string()))?
            .as_str()
            .parse::<usize>()
            .map_err(|error| EngineError::InvalidPattern(error.to_string()))?;

        let mut grid = Grid::new(size)?;

        let rows: Vec<&str> = Regex::new(r"m (.*)")
            .unwrap()
            .captures_iter(contents)
            .map(|captures| captures.get(1).unwrap().as_str().trim())
            .collect();

        if rows.len() != size {
            return Err(EngineError::InvalidPattern(format!(
                "expected {} rows, found {}",
                size,
                rows.len()
            )));
        }

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != size {
                return Err(EngineError::InvalidPattern(format!(
                    "row {} holds {} cells, expected {}",
                    row,
                    line.chars().count(),
                    size
                )));
            }

            for (col, value) in line.chars().enumerate() {
                let cell = from_char(value).ok_or_else(|| {
                    EngineError::InvalidPattern(format!("invalid character value: {}", value))
                })?;
                grid.set(row, col, cell);
            }
        }

        Ok(grid)
    }

    /// Creates a grid where each cell is alive with probability `density`.
    ///
    /// # Arguments
    /// * `size` - The side length of the grid. Must be greater than zero.
    /// * `density` - The probability for each cell to start alive, clamped to `[0, 1]`.
    /// * `seed` - The seed for the random number generator.
    pub fn random(size: usize, density: f64, seed: u64) -> Result<Grid, EngineError> {
        let mut grid = Grid::new(size)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let density = density.clamp(0.0, 1.0);

        for cell in grid.cells.iter_mut() {
            if rng.gen_bool(density) {
                *cell = Cell::Alive;
            }
        }

        Ok(grid)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        // The flat index alone would alias out-of-range columns onto the
        // next row, so both coordinates are checked
        if row >= self.size || col >= self.size {
            return None;
        }

        self.cells.get(row * self.size + col).copied()
    }

    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        self.cells[row * self.size + col] = value;
    }

    /// Flips the cell between alive and dead.
    ///
    /// Coordinates must already be validated; the engine is the boundary
    /// that rejects out-of-range edits.
    pub fn toggle(&mut self, row: usize, col: usize) {
        self.cells[row * self.size + col] = self.cells[row * self.size + col].toggled();
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The coordinates of every live cell, in row-major order.
    pub fn alive(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                if cell.is_alive() {
                    let row = index / self.size;
                    let col = index % self.size;
                    return Some((row, col));
                }
                None
            })
            .collect()
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Counts the live cells among the up-to-8 Moore neighbors.
    ///
    /// Neighbors outside the grid are absent; the edges are hard, there is
    /// no wraparound.
    pub fn alive_neighbors(&self, row: usize, col: usize) -> usize {
        let mut count = 0;

        // For each coordinate around the given one in all 8 directions
        for i in -1..=1 {
            for j in -1..=1 {
                if i == 0 && j == 0 {
                    continue;
                }

                let n_row = row as i32 + i;
                let n_col = col as i32 + j;

                // Skip if the coordinate is out of bounds
                if n_row < 0
                    || n_row >= self.size as i32
                    || n_col < 0
                    || n_col >= self.size as i32
                {
                    continue;
                }

                if self
                    .get(n_row as usize, n_col as usize)
                    .is_some_and(|cell| cell.is_alive())
                {
                    count += 1;
                }
            }
        }

        count
    }

    /// Draws the grid to the console.
    ///
    /// With a previous generation supplied, cells that just became alive
    /// and live cells that will die next generation are colored
    /// differently. This is purely a display distinction; the transition
    /// rule never reads it.
    pub fn draw(&self, previous: Option<&Grid>) {
        let mut stdout = stdout();

        for row in 0..self.size {
            for col in 0..self.size {
                let cell = self.get(row, col).unwrap();
                execute!(
                    stdout,
                    SetForegroundColor(self.display_color(cell, row, col, previous)),
                    Print(cell.char()),
                    SetForegroundColor(Color::Reset)
                )
                .unwrap();
            }
            execute!(stdout, Print("\n")).unwrap();
        }

        stdout.flush().unwrap();
    }

    fn display_color(
        &self,
        cell: Cell,
        row: usize,
        col: usize,
        previous: Option<&Grid>,
    ) -> Color {
        if !cell.is_alive() {
            return cell.color();
        }

        // A live cell that was dead a generation ago was just born
        if previous.is_some_and(|previous| previous.get(row, col) == Some(Cell::Dead)) {
            return Color::Cyan;
        }

        // A live cell without 2 or 3 live neighbors dies next generation
        let neighbors = self.alive_neighbors(row, col);
        if neighbors != 2 && neighbors != 3 {
            return Color::Red;
        }

        cell.color()
    }
}
