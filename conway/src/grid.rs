// grid.rs - Toroidal cell grid for Conway's Game of Life

use std::fmt::{self, Write};

use crate::error::{LifeError, Result};

pub const ALIVE_GLYPH: char = '*';
pub const DEAD_GLYPH: char = '-';

/// Offsets of the 8 cells surrounding a cell.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Fixed-size boolean grid whose edges wrap around (a torus).
///
/// Cells are stored row-major. Reads through [`Grid::alive`] wrap any
/// coordinate onto the torus; writes through [`Grid::set`] only accept
/// in-range coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates an all-dead grid. Zero-sized dimensions are rejected.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .filter(|_| width > 0 && height > 0)
            .filter(|_| isize::try_from(width).is_ok() && isize::try_from(height).is_ok())
            .ok_or(LifeError::InvalidDimension { width, height })?;

        Ok(Self {
            cells: vec![false; len],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Sets the cell at exact coordinates. Never wraps.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let i = self.idx(x, y);
        self.cells[i] = alive;
        Ok(())
    }

    /// Reads the cell at `(x, y)` wrapped onto the torus.
    #[inline]
    pub fn alive(&self, x: isize, y: isize) -> bool {
        // Dimensions fit in isize, checked at construction.
        let wx = x.rem_euclid(self.width as isize) as usize;
        let wy = y.rem_euclid(self.height as isize) as usize;
        self.cells[self.idx(wx, wy)]
    }

    /// Number of live cells among the 8 toroidal neighbors of `(x, y)`.
    pub fn live_neighbors(&self, x: isize, y: isize) -> u8 {
        // Reduce first so the offsets below can't overflow near isize::MIN/MAX.
        let x = x.rem_euclid(self.width as isize);
        let y = y.rem_euclid(self.height as isize);
        let mut count = 0;
        for &(dx, dy) in &NEIGHBORS {
            if self.alive(x + dx, y + dy) {
                count += 1;
            }
        }
        count
    }

    /// State of `(x, y)` in the next generation under B3/S23. Reads only.
    pub fn next_state(&self, x: isize, y: isize) -> bool {
        match (self.alive(x, y), self.live_neighbors(x, y)) {
            (true, 2) | (true, 3) => true, // Survival
            (false, 3) => true,            // Birth
            _ => false,                    // Death or stays dead
        }
    }

    /// Writes the next generation of `self` into `next`, overwriting every cell.
    pub(crate) fn evolve_into(&self, next: &mut Grid) {
        debug_assert_eq!((self.width, self.height), (next.width, next.height));

        for y in 0..self.height {
            for x in 0..self.width {
                let i = next.idx(x, y);
                next.cells[i] = self.next_state(x as isize, y as isize);
            }
        }
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Coordinates of live cells, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(i, _)| (i % width, i / width))
    }

    /// Row-major rows of cells, top to bottom.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                f.write_char(if cell { ALIVE_GLYPH } else { DEAD_GLYPH })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}
