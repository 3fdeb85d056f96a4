// simulation.rs - Double-buffered generation stepping

use std::fmt;

use tracing::{debug, trace};

use crate::error::Result;
use crate::grid::Grid;
use crate::patterns::{self, Pattern};

/// Game of Life state: the current generation plus a scratch buffer.
///
/// [`Simulation::step`] writes generation N+1 into the scratch buffer while
/// reading only generation N, then swaps the two. Between calls `current`
/// is always a complete generation.
#[derive(Clone, Debug)]
pub struct Simulation {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Simulation {
    /// Allocates both buffers and seeds `current` with the given live cells.
    pub fn new<I>(width: usize, height: usize, seed: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut current = Grid::new(width, height)?;
        let next = Grid::new(width, height)?;

        for (x, y) in seed {
            current.set(x, y, true)?;
        }

        debug!(width, height, population = current.population(), "seeded simulation");

        Ok(Self {
            current,
            next,
            generation: 0,
        })
    }

    /// Seeds with `pattern` placed with its top-left corner at `origin`.
    pub fn with_pattern(
        width: usize,
        height: usize,
        pattern: &Pattern,
        origin: (usize, usize),
    ) -> Result<Self> {
        Self::new(width, height, pattern.placed_at(origin.0, origin.1))
    }

    /// The reference configuration: a glider at (12,11),(13,12),(11,13),(12,13),(13,13) in 25x25.
    pub fn canonical() -> Result<Self> {
        let (width, height) = patterns::CANONICAL_SIZE;
        Self::with_pattern(width, height, &patterns::GLIDER, patterns::CANONICAL_ORIGIN)
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        self.current.evolve_into(&mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;

        trace!(generation = self.generation, population = self.current.population(), "step");
    }

    /// Text snapshot of the current generation, one line per row.
    pub fn render(&self) -> String {
        self.current.to_string()
    }

    pub fn width(&self) -> usize {
        self.current.width()
    }

    pub fn height(&self) -> usize {
        self.current.height()
    }

    /// Number of steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// The authoritative grid.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.current.live_cells()
    }

    pub(crate) fn into_parts(self) -> (Grid, Grid, u64) {
        (self.current, self.next, self.generation)
    }
}

impl fmt::Display for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.current, f)
    }
}
