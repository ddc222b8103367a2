use super::Grid;

/// Owner of the single current generation.
///
/// Readers only ever see whole generations: the next grid is built
/// elsewhere and swapped in by [`GridState::replace_with`].
#[derive(Clone, Debug)]
pub struct GridState {
    current: Grid,
}

impl GridState {
    /// All-dead N×N state
    pub fn new(size: usize) -> Self {
        Self {
            current: Grid::new(size),
        }
    }

    pub fn size(&self) -> usize {
        self.current.size()
    }

    /// Current generation, read-only
    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Flip a cell; positions off the grid are ignored
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        self.current.toggle(row, col)
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.current.is_alive(row, col)
    }

    /// Swap in a fully computed generation, dropping the old one.
    ///
    /// # Panics
    /// If `next` has a different side length.
    pub fn replace_with(&mut self, next: Grid) {
        assert_eq!(
            next.size(),
            self.current.size(),
            "replacement grid size does not match"
        );
        self.current = next;
    }

    /// Visit every live cell in row-major order
    pub fn for_each_alive<F: FnMut(usize, usize)>(&self, mut visitor: F) {
        self.current
            .iter_alive()
            .for_each(|(row, col)| visitor(row, col));
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.current.clear();
    }

    /// Mutable access for whole-grid edits such as seeding random soup
    pub fn edit(&mut self) -> &mut Grid {
        &mut self.current
    }
}
