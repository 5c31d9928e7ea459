mod algorithm;
mod cell;
mod grid;
mod kernel;
mod patterns;
mod rules;
pub mod neighbors;
pub mod stats;
pub mod transition;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use grid::Grid;
pub use kernel::Kernel;
pub use neighbors::NeighborCounts;
pub use patterns::{Pattern, presets};
pub use rules::{RulePreset, RuleSet, all_rules};
pub use stats::{GenerationStats, Statistics, shannon_entropy};
