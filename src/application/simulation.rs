use rand::Rng;
use tracing::{debug, info, instrument, warn};

use super::config::{SimulationConfig, validate_density, validate_dimensions};
use crate::domain::{
    Algorithm, GenerationStats, Grid, Kernel, RuleSet, Statistics, neighbors, transition,
};
use crate::error::{Error, Result};

/// Lifecycle of a [`Simulation`].
/// `Uninitialized -> Seeded -> Running (repeated steps) -> Stopped`, where
/// `Stopped` is terminal and reachable from every other state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Seeded,
    Running,
    Stopped,
}

impl DriverState {
    pub fn name(&self) -> &'static str {
        match self {
            DriverState::Uninitialized => "uninitialized",
            DriverState::Seeded => "seeded",
            DriverState::Running => "running",
            DriverState::Stopped => "stopped",
        }
    }
}

/// Result of one generation: the new grid and its statistics
#[derive(Debug)]
pub struct Step<'a> {
    pub grid: &'a Grid,
    pub stats: GenerationStats,
}

/// Simulation owns the current grid, rule, kernel and statistics and
/// advances them one synchronous generation per `step()`.
pub struct Simulation {
    grid: Option<Grid>,
    rule: RuleSet,
    kernel: Kernel,
    algorithm: Algorithm,
    statistics: Statistics,
    state: DriverState,
}

impl Simulation {
    pub fn new(rule: RuleSet, kernel: Kernel) -> Self {
        let unreachable = rule.unreachable_counts(kernel.max_count());
        if !unreachable.is_empty() {
            warn!(
                rule = %rule,
                kernel_size = kernel.size(),
                ?unreachable,
                "rule names neighbor counts the kernel can never produce"
            );
        }

        Self {
            grid: None,
            rule,
            kernel,
            algorithm: Algorithm::default(),
            statistics: Statistics::new(),
            state: DriverState::Uninitialized,
        }
    }

    /// Build an unseeded simulation from validated config
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.rule_set()?, config.kernel()?))
    }

    /// Select the neighbor-counting strategy (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Seed a fresh random grid: one Bernoulli(`alive_probability`) draw per cell.
    /// Reseeding a running simulation restarts its statistics.
    #[instrument(skip(self, rng))]
    pub fn seed<R: Rng + ?Sized>(
        &mut self,
        width: usize,
        height: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<()> {
        self.ensure_not_stopped("seed")?;
        validate_dimensions(width, height)?;
        validate_density(alive_probability)?;

        self.install(Grid::random(width, height, alive_probability, rng)?);
        Ok(())
    }

    /// Seed from an explicit grid, e.g. a placed pattern
    pub fn load(&mut self, grid: Grid) -> Result<()> {
        self.ensure_not_stopped("load")?;
        let (width, height) = grid.dimensions();
        validate_dimensions(width, height)?;

        self.install(grid);
        Ok(())
    }

    fn install(&mut self, grid: Grid) {
        info!(
            width = grid.width(),
            height = grid.height(),
            population = grid.population(),
            rule = %self.rule,
            kernel_size = self.kernel.size(),
            "simulation seeded"
        );
        self.grid = Some(grid);
        self.statistics = Statistics::new();
        self.state = DriverState::Seeded;
    }

    /// Advance one generation: count neighbors on the current snapshot, apply
    /// the rule into a new grid, record statistics, then swap the grid in.
    pub fn step(&mut self) -> Result<Step<'_>> {
        let current = match (self.state, self.grid.as_ref()) {
            (DriverState::Seeded | DriverState::Running, Some(grid)) => grid,
            _ => return Err(self.invalid("step")),
        };

        let counts = neighbors::count_with(current, &self.kernel, self.algorithm);
        let next = if self.algorithm.is_parallel() {
            transition::apply_parallel(current, &counts, &self.rule)
        } else {
            transition::apply(current, &counts, &self.rule)
        };
        let stats = self.statistics.record(&next);

        debug!(
            generation = stats.generation,
            population = stats.population,
            entropy = stats.entropy,
            "generation advanced"
        );

        self.state = DriverState::Running;
        let grid = &*self.grid.insert(next);
        Ok(Step { grid, stats })
    }

    /// Run `generations` steps, returning the statistics of the last one
    pub fn advance(&mut self, generations: usize) -> Result<Option<GenerationStats>> {
        let mut last = None;
        for _ in 0..generations {
            last = Some(self.step()?.stats);
        }
        Ok(last)
    }

    /// Stop the simulation; later `step()` calls are rejected
    pub fn stop(&mut self) {
        if self.state == DriverState::Stopped {
            return;
        }
        info!(
            generations = self.statistics.len(),
            peak_population = self.statistics.peak_population().unwrap_or(0),
            "simulation stopped"
        );
        self.state = DriverState::Stopped;
    }

    fn ensure_not_stopped(&self, operation: &'static str) -> Result<()> {
        match self.state {
            DriverState::Stopped => Err(self.invalid(operation)),
            _ => Ok(()),
        }
    }

    fn invalid(&self, operation: &'static str) -> Error {
        Error::InvalidState {
            operation,
            state: self.state.name(),
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.state == DriverState::Stopped
    }

    /// Current grid snapshot; `None` until seeded
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn rule(&self) -> &RuleSet {
        &self.rule
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Read-only population/entropy histories
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Generations advanced since the last seed
    pub fn generation(&self) -> u64 {
        self.statistics.len() as u64
    }
}
