//! Headless stepping benchmark: milliseconds per generation by grid size

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use life_viewer::{Automaton, Grid, application::RANDOM_DENSITY, config::MAX_GRID_SIZE};

fn benchmark_step(size: usize, iterations: u32) -> (f64, usize) {
    let automaton = Automaton::new(size);
    let mut grid = Grid::new(size);
    grid.randomize(&mut StdRng::seed_from_u64(size as u64), RANDOM_DENSITY);

    let start = Instant::now();
    for _ in 0..iterations {
        grid = automaton.step(&grid);
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, grid.population())
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [40, 80, 160, 320, MAX_GRID_SIZE];
    let iterations = 50;

    println!("{:>10} {:>12} {:>14} {:>12}", "Size", "ms/gen", "Mcells/sec", "Population");
    println!("{:-<52}", "");

    for size in sizes {
        let (ms, population) = benchmark_step(size, iterations);
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>14.1} {:>12}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0,
            population
        );
    }
}
