mod cell;
mod grid;
mod grid_state;
mod automaton;

pub use cell::Cell;
pub use grid::Grid;
pub use grid_state::GridState;
pub use automaton::Automaton;
