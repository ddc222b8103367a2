// Domain layer - grid and generation rule
pub mod domain;

// Application layer - simulation control, pacing, coordinate mapping
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Automaton, Cell, Grid, GridState};
pub use application::{CoordinateMapper, RenderPosition, Simulation, SimulationMode, TickThrottle};
pub use config::Config;
pub use error::ConfigError;
