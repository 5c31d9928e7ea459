//! Per-generation population and entropy tracking.

use serde::{Deserialize, Serialize};

use super::Grid;

/// Statistics recorded for one generation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (1 for the first step after seeding)
    pub generation: u64,
    /// Number of alive cells
    pub population: usize,
    /// Binary Shannon entropy of the alive fraction, in bits
    pub entropy: f64,
}

/// Binary Shannon entropy `-p·log2(p) - (1-p)·log2(1-p)` of `alive / total`,
/// with `0·log2(0) = 0`.
pub fn shannon_entropy(alive: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let p_alive = alive as f64 / total as f64;
    let term = |p: f64| if p > 0.0 { -p * p.log2() } else { 0.0 };
    term(p_alive) + term(1.0 - p_alive)
}

/// Append-only, index-aligned population and entropy histories
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    population: Vec<usize>,
    entropy: Vec<f64>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive population and entropy from `grid` and append both
    pub fn record(&mut self, grid: &Grid) -> GenerationStats {
        let population = grid.population();
        let entropy = shannon_entropy(population, grid.len());

        self.population.push(population);
        self.entropy.push(entropy);

        GenerationStats {
            generation: self.population.len() as u64,
            population,
            entropy,
        }
    }

    pub fn population_history(&self) -> &[usize] {
        &self.population
    }

    pub fn entropy_history(&self) -> &[f64] {
        &self.entropy
    }

    /// Number of recorded generations
    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// The most recently recorded entry
    pub fn latest(&self) -> Option<GenerationStats> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Entry `index`, which describes generation `index + 1`
    pub fn get(&self, index: usize) -> Option<GenerationStats> {
        Some(GenerationStats {
            generation: index as u64 + 1,
            population: *self.population.get(index)?,
            entropy: *self.entropy.get(index)?,
        })
    }

    pub fn peak_population(&self) -> Option<usize> {
        self.population.iter().copied().max()
    }

    /// Iterate over all recorded entries in generation order
    pub fn iter(&self) -> impl Iterator<Item = GenerationStats> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}
