//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! [`Grid`] holds one generation and computes per-cell successor states;
//! [`Simulation`] double-buffers two grids and advances whole generations.

mod error;
mod grid;
mod history;
pub mod patterns;
mod shared;
mod simulation;

pub use error::{LifeError, Result};
pub use grid::{ALIVE_GLYPH, DEAD_GLYPH, Grid};
pub use history::CycleDetector;
pub use patterns::Pattern;
pub use shared::SharedSimulation;
pub use simulation::Simulation;
