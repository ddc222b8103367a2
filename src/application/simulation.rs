use crate::application::{CoordinateMapper, RenderPosition, TickThrottle};
use crate::domain::{Automaton, GridState};
use rand::Rng;

/// Fraction of cells seeded alive by [`Simulation::randomize`]
pub const RANDOM_DENSITY: f64 = 0.3;

/// Whether generations advance on their own
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SimulationMode {
    #[default]
    Paused,
    Running,
}

impl SimulationMode {
    pub const fn toggled(self) -> Self {
        match self {
            SimulationMode::Paused => SimulationMode::Running,
            SimulationMode::Running => SimulationMode::Paused,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            SimulationMode::Paused => "Paused",
            SimulationMode::Running => "Running",
        }
    }
}

/// Simulation orchestrates the grid, the automaton and the render list.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    grid: GridState,
    automaton: Automaton,
    mapper: CoordinateMapper,
    throttle: TickThrottle,
    mode: SimulationMode,
    generation: u64,
    render_positions: Vec<RenderPosition>,
}

impl Simulation {
    /// All-dead N×N simulation, paused, stepping at most `ticks_per_second`
    pub fn new(size: usize, ticks_per_second: f64) -> Self {
        Self {
            grid: GridState::new(size),
            automaton: Automaton::new(size),
            mapper: CoordinateMapper::new(size),
            throttle: TickThrottle::new(ticks_per_second),
            mode: SimulationMode::default(),
            generation: 0,
            render_positions: Vec::new(),
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    pub fn mode(&self) -> SimulationMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.mode == SimulationMode::Running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Render offsets of live cells as of the last tick, row-major
    pub fn render_positions(&self) -> &[RenderPosition] {
        &self.render_positions
    }

    /// Flip between paused and running
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        log::info!("simulation {} at generation {}", self.mode.name(), self.generation);
    }

    /// Flip one cell. Ignored while running or when off the grid.
    /// Returns whether the edit was applied.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        if self.is_running() {
            log::debug!("ignoring toggle at ({row}, {col}) while running");
            return false;
        }
        let applied = self.grid.toggle(row, col);
        if applied {
            log::debug!("toggled ({row}, {col})");
        }
        applied
    }

    /// Flip the cell under a device position, given the current window size
    pub fn toggle_at_device(&mut self, px: f32, py: f32, width: f32, height: f32) -> bool {
        if self.is_running() {
            return false;
        }
        match self.mapper.device_to_cell(px, py, width, height) {
            Some((row, col)) => self.toggle_cell(row, col),
            None => {
                log::debug!("click at ({px}, {py}) is outside the grid");
                false
            }
        }
    }

    /// Kill every cell and reset the generation counter. Ignored while running.
    pub fn clear(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.grid.clear();
        self.generation = 0;
        log::debug!("grid cleared");
        true
    }

    /// Seed random soup and reset the generation counter. Ignored while running.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.is_running() {
            return false;
        }
        self.grid.edit().randomize(rng, RANDOM_DENSITY);
        self.generation = 0;
        log::debug!("grid randomized, population {}", self.grid.population());
        true
    }

    /// Advance one tick if the throttle allows it at time `now` (seconds).
    /// Returns whether a tick ran.
    pub fn tick_if_due(&mut self, now: f64) -> bool {
        if !self.throttle.is_due(now) {
            return false;
        }
        self.tick();
        true
    }

    /// One tick: step when running, then rebuild the render list
    pub fn tick(&mut self) {
        if self.is_running() {
            let next = self.automaton.step(self.grid.current());
            self.grid.replace_with(next);
            self.render_positions.clear();
            self.generation += 1;
            log::trace!(
                "generation {} population {}",
                self.generation,
                self.grid.population()
            );
        }
        self.rebuild_render_positions();
    }

    fn rebuild_render_positions(&mut self) {
        let mapper = self.mapper;
        let positions = &mut self.render_positions;
        positions.clear();
        self.grid
            .for_each_alive(|row, col| positions.push(mapper.cell_to_offset(row, col)));
    }
}
