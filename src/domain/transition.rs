//! Synchronous birth/survival transition.
//!
//! The next grid is built from scratch out of the previous grid and counts
//! taken from that same grid; the input grid is never written.

use rayon::prelude::*;

use super::{Cell, Grid, NeighborCounts, RuleSet};

/// Precomputed rule outcome per (state, neighbor count).
/// Index format: `count * 2 + alive`.
struct RuleLookup {
    table: Vec<bool>,
}

impl RuleLookup {
    fn build(rule: &RuleSet, max_count: u32) -> Self {
        let table = (0..=max_count)
            .flat_map(|n| {
                [
                    Cell::Dead.evolve(n, rule).is_alive(),
                    Cell::Alive.evolve(n, rule).is_alive(),
                ]
            })
            .collect();
        Self { table }
    }

    #[inline]
    fn next(&self, current: Cell, neighbors: u32) -> Cell {
        let idx = neighbors as usize * 2 + current.as_u8() as usize;
        Cell::from_bool(self.table.get(idx).copied().unwrap_or(false))
    }
}

/// Counts above the rule's largest condition always map to dead, so the
/// table never grows past that condition even for very large kernels
fn lookup_for(counts: &NeighborCounts, rule: &RuleSet) -> RuleLookup {
    let max_count = counts.as_slice().iter().copied().max().unwrap_or(0);
    RuleLookup::build(rule, max_count.min(rule.max_condition()))
}

/// Apply the rule to every cell, returning a wholly new grid
pub fn apply(grid: &Grid, counts: &NeighborCounts, rule: &RuleSet) -> Grid {
    debug_assert_eq!(grid.dimensions(), counts.dimensions());
    let lookup = lookup_for(counts, rule);

    let cells = grid
        .cells()
        .iter()
        .zip(counts.as_slice())
        .map(|(&cell, &n)| lookup.next(cell, n))
        .collect();

    let (width, height) = grid.dimensions();
    Grid::from_parts(width, height, cells)
}

/// Parallel variant of [`apply`]; produces an identical grid
pub fn apply_parallel(grid: &Grid, counts: &NeighborCounts, rule: &RuleSet) -> Grid {
    debug_assert_eq!(grid.dimensions(), counts.dimensions());
    let lookup = lookup_for(counts, rule);

    let cells: Vec<Cell> = grid
        .cells()
        .par_iter()
        .zip(counts.as_slice().par_iter())
        .map(|(&cell, &n)| lookup.next(cell, n))
        .collect();

    let (width, height) = grid.dimensions();
    Grid::from_parts(width, height, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Kernel, neighbors};

    fn evolve(grid: &Grid, rule: &RuleSet) -> Grid {
        let counts = neighbors::count(grid, &Kernel::moore());
        apply(grid, &counts, rule)
    }

    #[test]
    fn test_blinker_oscillates() {
        let rule = RuleSet::conway();
        let mut grid = Grid::new(10, 10);
        grid.set(4, 5, Cell::Alive);
        grid.set(5, 5, Cell::Alive);
        grid.set(6, 5, Cell::Alive);

        let next = evolve(&grid, &rule);
        assert_eq!(next.alive_cells(), vec![(5, 4), (5, 5), (5, 6)]);

        let next2 = evolve(&next, &rule);
        assert_eq!(next2, grid);
    }

    #[test]
    fn test_block_still_life() {
        let rule = RuleSet::conway();
        let mut grid = Grid::new(10, 10);
        grid.set(4, 4, Cell::Alive);
        grid.set(5, 4, Cell::Alive);
        grid.set(4, 5, Cell::Alive);
        grid.set(5, 5, Cell::Alive);

        assert_eq!(evolve(&grid, &rule), grid);
    }

    #[test]
    fn test_input_grid_untouched() {
        let rule = RuleSet::conway();
        let grid = Grid::from_rows(&[&[0, 0, 0, 0], &[0, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]])
            .unwrap();
        let before = grid.clone();
        let _ = evolve(&grid, &rule);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_transition_is_deterministic() {
        let rule = RuleSet::parse("B368/S245").unwrap();
        let mut grid = Grid::new(16, 16);
        for i in 0..60 {
            grid.set((i * 5) % 16, (i * 3) % 16, Cell::Alive);
        }
        let counts = neighbors::count(&grid, &Kernel::moore());

        assert_eq!(apply(&grid, &counts, &rule), apply(&grid, &counts, &rule));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let rule = RuleSet::conway();
        let mut grid = Grid::new(50, 50);
        for i in 0..100 {
            grid.set(i % 50, (i * 7) % 50, Cell::Alive);
        }
        let counts = neighbors::count(&grid, &Kernel::moore());

        assert_eq!(apply(&grid, &counts, &rule), apply_parallel(&grid, &counts, &rule));
    }

    #[test]
    fn test_birth_and_survival_sets() {
        // 3 alive in a row: center has 2, cells above/below the center have 3
        let rule = RuleSet::parse("B2/S3").unwrap();
        let grid = Grid::from_rows(&[
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0],
        ])
        .unwrap();
        let next = evolve(&grid, &rule);

        // center had 2 neighbors and S3 does not keep it
        assert_eq!(next.get(2, 2), Some(Cell::Dead));
        // (0, 1) touches only (1, 2): 1 neighbor, no birth
        assert_eq!(next.get(0, 1), Some(Cell::Dead));
        // (1, 1) touches (1, 2) and (2, 2): born on 2
        assert_eq!(next.get(1, 1), Some(Cell::Alive));
    }
}
