// history.rs - Detects repeating generations by hashing recent grids

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

const HISTORY_LEN: usize = 10;

/// Remembers hashes of the last few generations.
///
/// A still life is reported on the step after it settles; an oscillator with
/// period up to 10 is reported one period after it starts repeating.
#[derive(Clone, Debug, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.width().hash(&mut hasher);
    for row in grid.rows() {
        row.hash(&mut hasher);
    }
    hasher.finish()
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid` and reports whether it matches one of the remembered generations.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let filled = self.count.min(HISTORY_LEN);
        if self.history[..filled].contains(&hash) {
            return true;
        }
        self.history[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Simulation;

    #[test]
    fn still_life_detected_next_step() {
        let mut sim = Simulation::new(6, 6, [(1, 1), (2, 1), (1, 2), (2, 2)]).unwrap();
        let mut detector = CycleDetector::new();
        assert!(!detector.observe(sim.current()));
        sim.step();
        assert!(detector.observe(sim.current()));
    }

    #[test]
    fn blinker_detected_after_one_period() {
        let mut sim = Simulation::new(5, 5, [(1, 2), (2, 2), (3, 2)]).unwrap();
        let mut detector = CycleDetector::new();
        assert!(!detector.observe(sim.current()));
        sim.step();
        assert!(!detector.observe(sim.current()));
        sim.step();
        assert!(detector.observe(sim.current()));
    }

    #[test]
    fn glider_not_flagged_early() {
        let mut sim = Simulation::canonical().unwrap();
        let mut detector = CycleDetector::new();
        for _ in 0..20 {
            assert!(!detector.observe(sim.current()));
            sim.step();
        }
    }

    #[test]
    fn empty_grid_does_not_match_unfilled_slots() {
        let sim = Simulation::new(4, 4, std::iter::empty()).unwrap();
        let mut detector = CycleDetector::new();
        assert!(!detector.observe(sim.current()));
        detector.reset();
        assert!(!detector.observe(sim.current()));
    }
}
