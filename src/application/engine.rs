use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Grid, Rgb};

/// Engine orchestrates the simulation: one generation is a `step` (compute
/// every cell's pending state against committed neighbor states) followed
/// by a `commit` (apply pending states and recompute colors). The host
/// drives this once per tick and reads colors back for presentation.
///
/// The `*_at` variants take an explicit monotonic instant so tests can
/// control elapsed time; the plain forms use `Instant::now()`.
pub struct Engine {
    grid: Grid,
}

impl Engine {
    /// Create an engine with a randomized grid seeded from OS entropy.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_rng(width, height, &mut StdRng::from_os_rng())
    }

    /// Create an engine with a reproducible randomized grid.
    /// Two engines built from the same seed and size start identical.
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Self {
        Self::from_rng(width, height, &mut StdRng::seed_from_u64(seed))
    }

    /// Create an engine from an explicit RNG.
    pub fn from_rng(width: u32, height: u32, rng: &mut impl Rng) -> Self {
        let grid = Grid::randomized(width as usize, height as usize, rng, Instant::now());
        Self { grid }
    }

    /// Wrap an already-populated grid, for hand-built configurations.
    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn width(&self) -> u32 {
        self.grid.dimensions().0 as u32
    }

    pub fn height(&self) -> u32 {
        self.grid.dimensions().1 as u32
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Advance one generation (compute-only, no commit).
    pub fn step(&mut self) {
        self.step_at(Instant::now());
    }

    /// Synchronous update: all neighbor sums are taken against committed
    /// state before any cell's pending state is written, so no cell ever
    /// sees a same-generation update of a neighbor.
    pub fn step_at(&mut self, now: Instant) {
        let sums = self.grid.neighbor_sums();
        self.write_pending(&sums, now);
    }

    /// Like `step`, with the neighbor-sum sweep parallelized via rayon.
    /// Equivalent results: the sweep only reads committed state.
    pub fn step_parallel(&mut self) {
        self.step_parallel_at(Instant::now());
    }

    pub fn step_parallel_at(&mut self, now: Instant) {
        let sums = self.grid.neighbor_sums_parallel();
        self.write_pending(&sums, now);
    }

    fn write_pending(&mut self, sums: &[u8], now: Instant) {
        for (cell, &sum) in self.grid.cells_mut().iter_mut().zip(sums) {
            cell.step(sum, now);
        }
    }

    /// Finalize the generation: commit every cell's pending state and
    /// recompute its color, in iteration order.
    pub fn commit(&mut self) {
        self.commit_at(Instant::now());
    }

    pub fn commit_at(&mut self, now: Instant) {
        for cell in self.grid.cells_mut() {
            cell.apply(now);
        }
    }

    /// Read the committed color at a grid coordinate, for presentation.
    pub fn color_at(&self, x: u32, y: u32) -> Rgb {
        self.grid.cell(x as usize, y as usize).color()
    }
}
