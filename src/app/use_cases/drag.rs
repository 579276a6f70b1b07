//! Use-Case: kontinuierlicher Drag eines gegriffenen Kontrollpunkts.

use crate::app::state::{AppState, DragAxis, Selection};

/// Tick-Schritt eines aktiven Drags: Cursor unprojizieren und schreiben.
///
/// Planarer Modus schreibt unprojizierte x/y in die Punktposition, der
/// Tiefen-Modus schreibt das unprojizierte y in die z-Koordinate (Maus
/// hoch/runter = Tiefe vor/zurück). Jede Mutation ist gegen N geprüft;
/// ein Hintergrund-Pick erreicht diesen Pfad nie.
pub fn update(state: &mut AppState) {
    let Selection::Selected { index, .. } = state.selection.selection else {
        return;
    };
    if index >= state.polygon.len() {
        return;
    }

    let world = state
        .view
        .camera
        .unproject_cursor(state.view.cursor_pos, state.view.viewport_size);

    match state.selection.drag_axis {
        DragAxis::Planar => {
            state.polygon.set_position_xy(index, world.x, world.y);
            state.polygon.set_color(index, state.options.drag_xy_color);
        }
        DragAxis::Depth => {
            state.polygon.set_z(index, world.y);
            state.polygon.set_color(index, state.options.drag_z_color);
        }
    }
}

/// Schließt einen Drag ab: Farb-Schnappschuss zurück, Position bleibt.
pub fn commit(state: &mut AppState) {
    state.view.primary_button_down = false;

    if let Selection::Selected { index, saved_color } = state.selection.selection {
        state.polygon.set_color(index, saved_color);
        state.selection.selection = Selection::Idle;
        log::debug!("Drag committed: Punkt {index}");
    }
}

/// Schaltet den Achsenmodus um (auch mitten im Drag erlaubt).
pub fn toggle_axis(state: &mut AppState) {
    state.selection.drag_axis = match state.selection.drag_axis {
        DragAxis::Planar => DragAxis::Depth,
        DragAxis::Depth => DragAxis::Planar,
    };
}
