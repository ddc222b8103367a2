use macroquad::prelude::*;
use life_viewer::{
    Config, Simulation,
    rendering::{self, CellSquares, GridLines},
    input,
};

fn window_conf() -> Conf {
    // Errors are reported from main once the logger is up.
    let config = Config::from_env().unwrap_or_default();
    Conf {
        window_title: config.window_title,
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            return;
        }
    };
    log::info!(
        "starting {}x{} grid at up to {} ticks/s",
        config.grid_size,
        config.grid_size,
        config.ticks_per_second
    );

    let mut sim = Simulation::new(config.grid_size, config.ticks_per_second);

    // Static geometry, built once
    let lines = GridLines::new(config.grid_size);
    let mut squares = CellSquares::new(sim.mapper().cell_extent());

    loop {
        if !input::process_keyboard_input(&mut sim) {
            break;
        }
        input::handle_mouse_toggle(&mut sim);

        if sim.tick_if_due(get_time()) {
            squares.set_translations(sim.render_positions());
        }

        rendering::draw_frame(&lines, &squares, &sim);

        next_frame().await;
    }

    log::info!("exiting at generation {}", sim.generation());
}
