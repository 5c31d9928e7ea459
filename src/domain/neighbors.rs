//! Neighbor counting under toroidal wraparound.
//!
//! For every cell (x, y) the count is the number of alive cells at each
//! non-center kernel offset (dx, dy), read at ((x + dx) mod W, (y + dy) mod H).
//! The grid is only ever read here, so a whole generation is counted from a
//! single consistent snapshot.

use rayon::prelude::*;

use super::{Algorithm, Grid, Kernel};

/// Per-cell neighbor counts, same shape as the grid they were taken from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborCounts {
    width: usize,
    height: usize,
    counts: Vec<u32>,
}

impl NeighborCounts {
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.counts[y * self.width + x])
    }

    /// Row-major counts
    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }
}

/// Count neighbors with the default strategy
pub fn count(grid: &Grid, kernel: &Kernel) -> NeighborCounts {
    count_with(grid, kernel, Algorithm::default())
}

/// Count neighbors with an explicit strategy
pub fn count_with(grid: &Grid, kernel: &Kernel, algorithm: Algorithm) -> NeighborCounts {
    let (width, height) = grid.dimensions();
    let counts = if grid.is_empty() {
        Vec::new()
    } else {
        match algorithm {
            Algorithm::Direct => count_direct(grid, kernel),
            Algorithm::DirectParallel => count_direct_parallel(grid, kernel),
            Algorithm::SlidingWindow => count_sliding_window(grid, kernel),
        }
    };
    NeighborCounts { width, height, counts }
}

/// Count live neighbors of a single cell by visiting every kernel offset
#[inline]
fn count_at(grid: &Grid, kernel: &Kernel, x: usize, y: usize) -> u32 {
    kernel
        .offsets()
        .filter(|&(dx, dy)| grid.get_wrapped(x as isize + dx, y as isize + dy).is_alive())
        .count() as u32
}

fn count_direct(grid: &Grid, kernel: &Kernel) -> Vec<u32> {
    grid.iter_cells()
        .map(|(x, y, _)| count_at(grid, kernel, x, y))
        .collect()
}

fn count_direct_parallel(grid: &Grid, kernel: &Kernel) -> Vec<u32> {
    let width = grid.width();
    let mut counts = vec![0u32; grid.len()];

    counts
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = count_at(grid, kernel, x, y);
            }
        });

    counts
}

/// The kernel is an all-ones square minus its center, so the neighborhood sum
/// separates into a horizontal window pass followed by a vertical one.
/// Windows wider than the grid simply revisit wrapped cells, matching the
/// direct summation exactly.
fn count_sliding_window(grid: &Grid, kernel: &Kernel) -> Vec<u32> {
    let (width, height) = grid.dimensions();
    let r = kernel.radius() as isize;
    let cells = grid.cells();

    let mut horizontal = vec![0u32; grid.len()];
    for (row, out) in cells.chunks(width).zip(horizontal.chunks_mut(width)) {
        let alive = |x: isize| row[x.rem_euclid(width as isize) as usize].as_u8() as u32;
        let mut sum: u32 = (-r..=r).map(alive).sum();
        for (x, slot) in out.iter_mut().enumerate() {
            *slot = sum;
            let x = x as isize;
            sum = sum + alive(x + r + 1) - alive(x - r);
        }
    }

    let mut counts = vec![0u32; grid.len()];
    for x in 0..width {
        let column = |y: isize| horizontal[y.rem_euclid(height as isize) as usize * width + x];
        let mut sum: u32 = (-r..=r).map(column).sum();
        for y in 0..height {
            let idx = y * width + x;
            // window sum includes the center cell itself
            counts[idx] = sum - cells[idx].as_u8() as u32;
            let y = y as isize;
            sum = sum + column(y + r + 1) - column(y - r);
        }
    }

    counts
}
