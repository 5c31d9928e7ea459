mod cadence;
mod config;
mod simulation;

pub use cadence::Cadence;
pub use config::SimulationConfig;
pub use simulation::{DriverState, Simulation, Step};
