//! Generation transition for Conway's Life on a bounded grid.

use super::Grid;

/// B3/S23 stepping for grids of one fixed side length.
///
/// The next generation is computed entirely from the prior one into a
/// freshly allocated buffer, so no cell's update can leak into a
/// neighbor's count within the same generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Automaton {
    size: usize,
}

impl Automaton {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Pure functional evolution - returns the next generation.
    ///
    /// # Panics
    /// If `grid` was built for a different side length than this automaton.
    pub fn step(&self, grid: &Grid) -> Grid {
        assert_eq!(
            grid.size(),
            self.size,
            "grid size does not match automaton size"
        );

        let mut next = Grid::new(self.size);
        for (row, col, cell) in grid.iter_cells() {
            let neighbors = grid.count_live_neighbors(row, col);
            next.set(row, col, cell.evolve(neighbors));
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stays_empty() {
        let automaton = Automaton::new(10);
        let next = automaton.step(&Grid::new(10));
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let automaton = Automaton::new(10);
        let next = automaton.step(&Grid::with_alive(10, &[(5, 5)]));
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_block_still_life() {
        let automaton = Automaton::new(10);
        let block = Grid::with_alive(10, &[(4, 4), (4, 5), (5, 4), (5, 5)]);
        assert_eq!(automaton.step(&block), block);
    }

    #[test]
    fn test_block_in_corner_is_stable() {
        let automaton = Automaton::new(6);
        let block = Grid::with_alive(6, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(automaton.step(&block), block);
    }

    #[test]
    fn test_blinker_evolution() {
        let automaton = Automaton::new(10);
        let horizontal = Grid::with_alive(10, &[(5, 4), (5, 5), (5, 6)]);
        let vertical = Grid::with_alive(10, &[(4, 5), (5, 5), (6, 5)]);

        let next = automaton.step(&horizontal);
        assert_eq!(next, vertical);

        let next2 = automaton.step(&next);
        assert_eq!(next2, horizontal);
    }

    #[test]
    fn test_blinker_on_edge_is_clipped() {
        // Vertical phase would need row -1; the bounded grid just loses it.
        let automaton = Automaton::new(5);
        let horizontal = Grid::with_alive(5, &[(0, 1), (0, 2), (0, 3)]);
        let next = automaton.step(&horizontal);
        assert_eq!(next, Grid::with_alive(5, &[(0, 2), (1, 2)]));
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let automaton = Automaton::new(10);
        let grid = Grid::with_alive(10, &[(5, 4), (5, 5), (5, 6)]);
        let before = grid.clone();
        let _ = automaton.step(&grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_glider_moves_diagonally() {
        let automaton = Automaton::new(12);
        // Row 0 is the bottom row, so this glider travels towards row 0.
        let glider = [(4, 5), (3, 6), (2, 4), (2, 5), (2, 6)];
        let mut grid = Grid::with_alive(12, &glider);
        for _ in 0..4 {
            grid = automaton.step(&grid);
        }
        let moved: Vec<_> = glider.iter().map(|&(r, c)| (r - 1, c + 1)).collect();
        assert_eq!(grid, Grid::with_alive(12, &moved));
    }

    #[test]
    #[should_panic(expected = "grid size does not match")]
    fn test_size_mismatch_panics() {
        Automaton::new(10).step(&Grid::new(11));
    }
}
