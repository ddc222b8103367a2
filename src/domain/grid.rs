use super::Cell;
use rand::Rng;

/// Grid is one N×N generation of the automaton.
/// Cells are stored row-major, row 0 first; the edges do not wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Side length N
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col)
            .then(|| self.cells[self.get_index(row, col)])
    }

    /// Out-of-range positions read as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out-of-range writes are dropped
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.contains(row, col) {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip cell at position. Returns false if the position is off the grid.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        if !self.contains(row, col) {
            return false;
        }
        let idx = self.get_index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        true
    }

    /// Count live neighbors, skipping offsets that fall off the grid
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill with random soup where each cell is alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(density)));
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx / self.size, idx % self.size, cell))
    }

    /// Positions of live cells, row-major
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
    }

    /// Build a grid with the given live positions; off-grid positions are ignored
    pub fn with_alive(size: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(size);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(8);
        assert_eq!(grid.size(), 8);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_bounds() {
        let mut grid = Grid::new(5);
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.get(0, 5), None);
        assert!(!grid.is_alive(100, 100));
        assert!(!grid.toggle(5, 5));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_corner_has_three_candidates() {
        let grid = Grid::with_alive(4, &[(0, 1), (1, 0), (1, 1)]);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        // no wraparound: the opposite corner sees none of them
        assert_eq!(grid.count_live_neighbors(3, 3), 0);
    }

    #[test]
    fn test_full_neighborhood() {
        let mut grid = Grid::new(3);
        grid.randomize(&mut StdRng::seed_from_u64(1), 1.0);
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(0, 1), 5);
    }

    #[test]
    fn test_iter_alive_is_row_major() {
        let grid = Grid::with_alive(4, &[(2, 1), (0, 3), (2, 0), (1, 1)]);
        let alive: Vec<_> = grid.iter_alive().collect();
        assert_eq!(alive, vec![(0, 3), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_randomize_is_seeded_and_clear_resets() {
        let mut a = Grid::new(20);
        let mut b = Grid::new(20);
        a.randomize(&mut StdRng::seed_from_u64(42), 0.3);
        b.randomize(&mut StdRng::seed_from_u64(42), 0.3);
        assert_eq!(a, b);
        assert!(a.population() > 0);

        a.clear();
        assert_eq!(a.population(), 0);
    }
}
