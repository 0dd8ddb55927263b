use std::time::Instant;

use rand::Rng;
use rayon::prelude::*;

use super::Cell;

/// Wrap a coordinate onto a toroidal axis of the given size.
/// True modulo semantics: total over all integers, result always in
/// `[0, size)`, and periodic in `size`.
pub fn wrap(coord: i64, size: usize) -> usize {
    coord.rem_euclid(size as i64) as usize
}

/// Grid owns the 2D toroidal arrangement of cells.
/// Cells are stored row-major and are never added or removed after
/// construction; only their state mutates, once per generation.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead.
    /// Zero-sized grids are rejected: wraparound divides by the axis size.
    pub fn new(width: usize, height: usize, now: Instant) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Cell::new(false, now); width * height],
        }
    }

    /// Create a grid with each cell independently alive or dead on a fair
    /// coin flip from the given RNG. Seeding the RNG makes the initial
    /// state reproducible.
    pub fn randomized(width: usize, height: usize, rng: &mut impl Rng, now: Instant) -> Self {
        let mut grid = Self::new(width, height, now);
        for cell in &mut grid.cells {
            *cell = Cell::new(rng.random(), now);
        }
        grid
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index. Out-of-range coordinates would
    /// silently alias into the next row, so they are caught here.
    const fn get_index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height, "cell coordinates out of range");
        y * self.width + x
    }

    /// Get cell at position. Out-of-range coordinates are a programming
    /// error; neighbor lookups never produce them thanks to wraparound.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[self.get_index(x, y)]
    }

    /// Replace the cell at position, entering `alive` at time `now`.
    /// Used to paint deterministic starting configurations.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool, now: Instant) {
        let idx = self.get_index(x, y);
        self.cells[idx] = Cell::new(alive, now);
    }

    /// Sum the committed `alive` states of the 8 Moore neighbors at
    /// toroidally wrapped coordinates.
    pub fn neighbor_sum(&self, x: usize, y: usize) -> u8 {
        (-1i64..=1)
            .flat_map(|dy| (-1i64..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter(|&(dx, dy)| {
                let nx = wrap(x as i64 + dx, self.width);
                let ny = wrap(y as i64 + dy, self.height);
                self.cell(nx, ny).is_alive()
            })
            .count() as u8
    }

    /// Neighbor sums for every cell in iteration order, computed against
    /// committed state only.
    pub fn neighbor_sums(&self) -> Vec<u8> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| self.neighbor_sum(x, y))
            .collect()
    }

    /// Parallel neighbor-sum sweep using rayon.
    /// Safe because the sweep only reads committed state; faster for
    /// large grids.
    pub fn neighbor_sums_parallel(&self) -> Vec<u8> {
        (0..self.height)
            .into_par_iter()
            .flat_map(|y| (0..self.width).into_par_iter().map(move |x| (x, y)))
            .map(|(x, y)| self.neighbor_sum(x, y))
            .collect()
    }

    /// Iterate over all cells with their positions, in the fixed
    /// row-major construction order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.cell(x, y)))
    }

    /// Mutable access to the cells in iteration order, for the engine's
    /// step and commit sweeps.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
