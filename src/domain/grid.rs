use rand::Rng;
use rand::distr::Bernoulli;

use super::Cell;
use crate::error::{Error, Result};

/// Grid owns the toroidal binary cell matrix.
/// Dimensions are fixed for the lifetime of the grid; cells are stored row-major
/// and addressed as (x, y) = (column, row).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Seed a grid with one independent Bernoulli draw per cell.
    /// `alive_probability` must lie in [0, 1]; NaN is rejected.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self> {
        let bernoulli = Bernoulli::new(alive_probability).map_err(|_| {
            Error::InvalidConfig(format!(
                "alive probability must be within [0, 1], got {}",
                alive_probability
            ))
        })?;
        let cells = (0..width * height)
            .map(|_| Cell::from_bool(rng.sample(bernoulli)))
            .collect();
        Ok(Self { width, height, cells })
    }

    /// Build a grid from row-major cells; `None` if the length does not match
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == width * height).then_some(Self { width, height, cells })
    }

    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self { width, height, cells }
    }

    /// Build a grid from rows of 0/1 values
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&v| Cell::from_bool(v != 0)))
            .collect();
        Some(Self { width, height, cells })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells (W·H)
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Get cell with toroidal wrapping on both axes; a zero-sized grid reads dead
    #[inline]
    pub fn get_wrapped(&self, x: isize, y: isize) -> Cell {
        if self.is_empty() {
            return Cell::Dead;
        }
        let nx = x.rem_euclid(self.width as isize) as usize;
        let ny = y.rem_euclid(self.height as isize) as usize;
        self.cells[self.get_index(nx, ny)]
    }

    /// Set cell at position; used while building a grid before it is handed
    /// to a simulation
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Set cell with toroidal wrapping
    pub fn set_wrapped(&mut self, x: isize, y: isize, cell: Cell) {
        if self.is_empty() {
            return;
        }
        let nx = x.rem_euclid(self.width as isize) as usize;
        let ny = y.rem_euclid(self.height as isize) as usize;
        self.set(nx, ny, cell);
    }

    /// Row-major cell slice
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (i % self.width, i / self.width, cell))
    }

    /// Positions of alive cells in row-major order
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
            .collect()
    }
}
