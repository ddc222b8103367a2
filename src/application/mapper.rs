/// Offset in normalized device space ([-1, 1] on both axes, y up) where the
/// unit square of a live cell is placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPosition {
    pub x: f32,
    pub y: f32,
}

/// Left and bottom edge of the render space
pub const VIEWPORT_MIN: f32 = -1.0;
/// Width and height of the render space
pub const VIEWPORT_EXTENT: f32 = 2.0;

/// CoordinateMapper converts between device pixels, grid cells and
/// render offsets for an N×N grid stretched over the whole window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    size: usize,
}

impl CoordinateMapper {
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    /// Side of one cell in render space
    pub fn cell_extent(&self) -> f32 {
        VIEWPORT_EXTENT / self.size as f32
    }

    /// Convert a device position (origin top-left) to a (row, col) cell,
    /// where row 0 is the bottom row.
    ///
    /// Returns `None` for positions that land outside the grid, including
    /// the far window edges where the raw formula yields exactly N.
    pub fn device_to_cell(
        &self,
        px: f32,
        py: f32,
        window_width: f32,
        window_height: f32,
    ) -> Option<(usize, usize)> {
        if window_width <= 0.0 || window_height <= 0.0 {
            return None;
        }
        let n = self.size as f32;
        let row = (((window_height - py) / window_height) * n).floor();
        let col = ((px / window_width) * n).floor();
        Some((self.index_in_range(row)?, self.index_in_range(col)?))
    }

    fn index_in_range(&self, value: f32) -> Option<usize> {
        (value.is_finite() && value >= 0.0 && value < self.size as f32).then_some(value as usize)
    }

    /// Bottom-left corner of the render square for (row, col)
    pub fn cell_to_offset(&self, row: usize, col: usize) -> RenderPosition {
        let extent = self.cell_extent();
        RenderPosition {
            x: VIEWPORT_MIN + extent * col as f32,
            y: VIEWPORT_MIN + extent * row as f32,
        }
    }
}
