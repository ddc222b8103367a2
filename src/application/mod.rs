mod mapper;
mod pacing;
mod simulation;

pub use mapper::{CoordinateMapper, RenderPosition, VIEWPORT_EXTENT, VIEWPORT_MIN};
pub use pacing::TickThrottle;
pub use simulation::{RANDOM_DENSITY, Simulation, SimulationMode};
