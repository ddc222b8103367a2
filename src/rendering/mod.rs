use macroquad::prelude::*;
use crate::application::{RenderPosition, Simulation, VIEWPORT_EXTENT, VIEWPORT_MIN};

/// Maps normalized render space ([-1, 1]², y up) onto the window in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenTransform {
    pub width: f32,
    pub height: f32,
}

impl ScreenTransform {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Transform for the current window
    pub fn current() -> Self {
        Self::new(screen_width(), screen_height())
    }

    /// Convert a render-space point to pixel coordinates (origin top-left)
    pub fn to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        let sx = (x - VIEWPORT_MIN) / VIEWPORT_EXTENT * self.width;
        let sy = (1.0 - (y - VIEWPORT_MIN) / VIEWPORT_EXTENT) * self.height;
        (sx, sy)
    }

    /// Pixel rectangle (x, y, w, h) covering a render-space square whose
    /// bottom-left corner is `origin`
    pub fn square(&self, origin: RenderPosition, extent: f32) -> (f32, f32, f32, f32) {
        let (x, y) = self.to_screen(origin.x, origin.y + extent);
        let w = extent / VIEWPORT_EXTENT * self.width;
        let h = extent / VIEWPORT_EXTENT * self.height;
        (x, y, w, h)
    }
}

/// Anything the renderer can put on screen given the window transform
pub trait Drawable {
    fn draw(&self, transform: &ScreenTransform);
}

/// Static reference lattice of separator lines, built once at startup
pub struct GridLines {
    /// Segment endpoints in render space: (x1, y1, x2, y2)
    segments: Vec<(f32, f32, f32, f32)>,
    color: Color,
}

impl GridLines {
    pub fn new(size: usize) -> Self {
        let step = VIEWPORT_EXTENT / size as f32;
        let max = VIEWPORT_MIN + VIEWPORT_EXTENT;
        let segments = (0..size)
            .map(|k| VIEWPORT_MIN + step * k as f32)
            .flat_map(|p| [(p, max, p, VIEWPORT_MIN), (max, p, VIEWPORT_MIN, p)])
            .collect();
        Self {
            segments,
            color: Color::from_rgba(40, 40, 40, 255),
        }
    }

    pub fn segments(&self) -> &[(f32, f32, f32, f32)] {
        &self.segments
    }
}

impl Drawable for GridLines {
    fn draw(&self, transform: &ScreenTransform) {
        for &(x1, y1, x2, y2) in &self.segments {
            let (sx1, sy1) = transform.to_screen(x1, y1);
            let (sx2, sy2) = transform.to_screen(x2, y2);
            draw_line(sx1, sy1, sx2, sy2, 1.0, self.color);
        }
    }
}

/// One square per live cell, instanced at the simulation's render offsets
pub struct CellSquares {
    extent: f32,
    translations: Vec<RenderPosition>,
    color: Color,
}

impl CellSquares {
    pub fn new(extent: f32) -> Self {
        Self {
            extent,
            translations: Vec::new(),
            color: WHITE,
        }
    }

    /// Replace the instance list with the latest render positions
    pub fn set_translations(&mut self, positions: &[RenderPosition]) {
        self.translations.clear();
        self.translations.extend_from_slice(positions);
    }
}

impl Drawable for CellSquares {
    fn draw(&self, transform: &ScreenTransform) {
        for &origin in &self.translations {
            let (x, y, w, h) = transform.square(origin, self.extent);
            draw_rectangle(x, y, w, h, self.color);
        }
    }
}

/// Draw the generation counter and mode in the top-left corner
pub fn draw_status(sim: &Simulation) {
    let status = format!(
        "{} | generation {} | population {}",
        sim.mode().name(),
        sim.generation(),
        sim.population()
    );
    let color = if sim.is_running() {
        Color::from_rgba(0, 255, 150, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    draw_text(&status, 8.0, 20.0, 20.0, color);
}

/// Draw one frame: lattice, live cells, status line
pub fn draw_frame(lines: &GridLines, squares: &CellSquares, sim: &Simulation) {
    let transform = ScreenTransform::current();
    clear_background(BLACK);
    let layers: [&dyn Drawable; 2] = [lines, squares];
    layers.iter().for_each(|layer| layer.draw(&transform));
    draw_status(sim);
}
