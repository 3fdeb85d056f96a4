// shared.rs - Simulation that tolerates readers while a step is in flight

use parking_lot::{Mutex, RwLock};
use tracing::trace;

use crate::error::Result;
use crate::grid::Grid;
use crate::simulation::Simulation;

/// Lock-guarded double buffer.
///
/// The next generation is computed into `scratch` while `current` is only
/// read-locked, so `render` keeps working during a step. The write lock is
/// held just for the buffer swap. The generation number lives under the same
/// lock as the grid, so the two are always read together.
#[derive(Debug)]
pub struct SharedSimulation {
    current: RwLock<(Grid, u64)>,
    scratch: Mutex<Grid>,
}

impl SharedSimulation {
    pub fn new<I>(width: usize, height: usize, seed: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        Ok(Simulation::new(width, height, seed)?.into())
    }

    /// Advances one generation. Concurrent callers are serialized.
    pub fn step(&self) {
        let mut scratch = self.scratch.lock();
        self.current.read().0.evolve_into(&mut scratch);

        let mut current = self.current.write();
        std::mem::swap(&mut current.0, &mut *scratch);
        current.1 += 1;

        trace!(generation = current.1, "shared step");
    }

    pub fn render(&self) -> String {
        self.current.read().0.to_string()
    }

    /// Generation number and its rendering, taken under one lock.
    pub fn render_with_generation(&self) -> (u64, String) {
        let current = self.current.read();
        (current.1, current.0.to_string())
    }

    pub fn population(&self) -> usize {
        self.current.read().0.population()
    }

    pub fn generation(&self) -> u64 {
        self.current.read().1
    }

    /// Copy of the current generation.
    pub fn snapshot(&self) -> Grid {
        self.current.read().0.clone()
    }
}

impl From<Simulation> for SharedSimulation {
    fn from(sim: Simulation) -> Self {
        let (current, scratch, generation) = sim.into_parts();
        Self {
            current: RwLock::new((current, generation)),
            scratch: Mutex::new(scratch),
        }
    }
}
