use macroquad::prelude::*;
use crate::application::Simulation;

/// Toggle the cell under the cursor on left click (ignored while running)
pub fn handle_mouse_toggle(sim: &mut Simulation) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let (px, py) = mouse_position();
    sim.toggle_at_device(px, py, screen_width(), screen_height());
}

/// Process keyboard input. Returns false when the window should close.
pub fn process_keyboard_input(sim: &mut Simulation) -> bool {
    type KeyAction = (KeyCode, fn(&mut Simulation));

    let actions: [KeyAction; 3] = [
        (KeyCode::Space, Simulation::toggle_mode),
        (KeyCode::C, |s| {
            s.clear();
        }),
        (KeyCode::R, |s| {
            s.randomize(&mut ::rand::rng());
        }),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(sim));

    !is_key_pressed(KeyCode::Escape)
}
