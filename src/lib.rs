// Domain layer - cells, rules, neighbor counting, transitions, statistics
pub mod domain;

// Application layer - simulation lifecycle and configuration
pub mod application;

pub mod error;

// Infrastructure layer - macroquad drawing for the viewer binary
pub mod rendering;
pub mod telemetry;

// Re-exports for convenience
pub use application::{Cadence, DriverState, Simulation, SimulationConfig, Step};
pub use domain::{
    Algorithm, Cell, GenerationStats, Grid, Kernel, Pattern, RuleSet, Statistics, presets,
};
pub use error::{Error, Result};
