//! Use-Case: Viewport- und Cursorzustand.

use glam::Vec2;

use crate::app::state::AppState;

pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

pub fn set_cursor(state: &mut AppState, screen_pos: Vec2) {
    state.view.cursor_pos = screen_pos;
}
