//! Use-Case: Pick-Auflösung über den Identifier-Pass.
//!
//! Zeichnet das Kontrollpolygon mit Identifier-Farben (Index i als i/255),
//! erzwingt den synchronen Flush des Collaborators und dekodiert das eine
//! zurückgelesene Pixel zu einer Selektion.

use crate::app::state::{AppState, Selection};
use crate::render::PickSurface;
use crate::shared::PICK_BACKGROUND_BYTE;

/// Dekodiertes Ergebnis eines Pixel-Readbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickResult {
    /// Reserviertes Hintergrund-Byte (255): keine Selektion
    Background,
    /// Byte unterhalb der Punktanzahl: gültiger Kontrollpunkt-Index
    Point(usize),
    /// Byte ≥ Punktanzahl, aber nicht das Hintergrund-Byte: ebenfalls
    /// keine Selektion, löst nie einen Schreibzugriff aus
    OutOfRange(u8),
}

/// Dekodiert ein Identifier-Byte gegen die Punktanzahl N.
pub fn decode_pick_byte(byte: u8, point_count: usize) -> PickResult {
    if byte == PICK_BACKGROUND_BYTE {
        PickResult::Background
    } else if (byte as usize) < point_count {
        PickResult::Point(byte as usize)
    } else {
        PickResult::OutOfRange(byte)
    }
}

/// Löst einen Pick an der aktuellen Cursor-Position auf.
///
/// Ein fehlgeschlagener Readback (CollaboratorFailure) wird zu "keine
/// Selektion" aufgelöst; der Zustand bleibt in jedem Fall konsistent —
/// entweder wird ein Index vollständig selektiert oder gar nichts.
pub fn resolve(state: &mut AppState, surface: &mut dyn PickSurface) {
    state.view.primary_button_down = true;

    // Press während aktiver Selektion: der Punkt trägt gerade die
    // Feedback-Farbe, ein neuer Schnappschuss würde sie als "Original"
    // festschreiben. Die bestehende Selektion bleibt unverändert.
    if state.selection.selection.is_selected() {
        return;
    }

    let positions = state.polygon.positions();
    let id_colors: Vec<f32> = (0..positions.len()).map(|i| i as f32 / 255.0).collect();
    let viewport = state.view.viewport_size;

    let x = state
        .view
        .cursor_pos
        .x
        .round()
        .clamp(0.0, (viewport[0] - 1.0).max(0.0)) as u32;
    let y = state
        .view
        .cursor_pos
        .y
        .round()
        .clamp(0.0, (viewport[1] - 1.0).max(0.0)) as u32;

    let readback = surface
        .draw_identifier_pass(
            &positions,
            &id_colors,
            &state.view.camera,
            viewport,
            state.options.pick_point_size_px,
        )
        .and_then(|_| surface.finish_and_read_pixel(x, y));

    let byte = match readback {
        Ok(pixel) => pixel[0],
        Err(e) => {
            log::warn!("Identifier-Readback fehlgeschlagen, Pick wird verworfen: {e}");
            state.selection.selection = Selection::Idle;
            state.selection.status_message = "background".to_string();
            return;
        }
    };

    match decode_pick_byte(byte, state.polygon.len()) {
        PickResult::Point(index) => {
            if let Some(saved_color) = state.polygon.color(index) {
                state.selection.selection = Selection::Selected { index, saved_color };
                state.selection.status_message = format!("point {index}");
                log::debug!("Pick aufgelöst: Punkt {index}");
            }
        }
        PickResult::Background | PickResult::OutOfRange(_) => {
            state.selection.selection = Selection::Idle;
            state.selection.status_message = "background".to_string();
        }
    }
}
