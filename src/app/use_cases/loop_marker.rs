//! Use-Case: Loop-Animation entlang der Catmull-Rom-Abtastpunkte.

use crate::app::state::AppState;
use crate::core::{catmull_rom_control_points, sample_segments, CurveVertex};

/// Schaltet die Loop-Animation um. Der Cursor bleibt erhalten, damit die
/// Markierung beim Wiedereinschalten dort weiterläuft, wo sie stand.
pub fn toggle(state: &mut AppState) {
    state.editor.loop_enabled = !state.editor.loop_enabled;
    if !state.editor.loop_enabled {
        state.derived.loop_marker = None;
    }
    log::debug!("Loop: {}", state.editor.loop_enabled);
}

/// Rückt die Markierung um einen Abtastpunkt vor.
///
/// Die Spline wird jeden Tick aus dem Live-Polygon neu abgetastet, damit
/// die Markierung einem laufenden Drag folgt. Wrap-Prüfung VOR dem
/// Kopieren: nach einem vollen Umlauf steht die Markierung wieder exakt
/// auf Abtastpunkt 0.
pub fn advance(state: &mut AppState) {
    if !state.editor.loop_enabled {
        return;
    }

    state.derived.catmull_points =
        catmull_rom_control_points(&state.polygon, state.options.cr_point_color);
    state.derived.catmull_samples =
        sample_segments(&state.derived.catmull_points, state.options.cr_curve_color);

    let total = state.derived.catmull_samples.len();
    if total == 0 {
        state.derived.loop_marker = None;
        return;
    }
    if state.editor.loop_cursor >= total {
        state.editor.loop_cursor = 0;
    }

    let sample = &state.derived.catmull_samples[state.editor.loop_cursor];
    state.derived.loop_marker = Some(CurveVertex::new(
        sample.position,
        state.options.loop_marker_color,
    ));
    state.editor.loop_cursor += 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_is_noop_while_disabled() {
        let mut state = AppState::new();
        advance(&mut state);
        assert!(state.derived.loop_marker.is_none());
        assert_eq!(state.editor.loop_cursor, 0);
    }

    #[test]
    fn test_first_advance_sits_on_sample_zero() {
        let mut state = AppState::new();
        toggle(&mut state);
        advance(&mut state);

        let marker = state.derived.loop_marker.expect("Markierung gesetzt");
        assert_eq!(marker.position, state.derived.catmull_samples[0].position);
        assert_eq!(marker.color, state.options.loop_marker_color);
        assert_eq!(state.editor.loop_cursor, 1);
    }

    #[test]
    fn test_cursor_wraps_after_full_lap() {
        let mut state = AppState::new();
        toggle(&mut state);

        let laps = crate::core::SAMPLES_PER_SEGMENT * state.polygon.len();
        for _ in 0..laps {
            advance(&mut state);
        }
        assert_eq!(state.editor.loop_cursor, laps);

        // Nächster Schritt wrappt und kopiert wieder Abtastpunkt 0.
        advance(&mut state);
        let marker = state.derived.loop_marker.expect("Markierung gesetzt");
        assert_eq!(marker.position, state.derived.catmull_samples[0].position);
        assert_eq!(state.editor.loop_cursor, 1);
    }

    #[test]
    fn test_toggle_off_clears_marker_but_keeps_cursor() {
        let mut state = AppState::new();
        toggle(&mut state);
        advance(&mut state);
        advance(&mut state);

        toggle(&mut state);
        assert!(state.derived.loop_marker.is_none());
        assert_eq!(state.editor.loop_cursor, 2);
    }
}
