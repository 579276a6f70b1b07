//! Use-Case: Neuberechnung der abgeleiteten Kurvenpuffer pro Tick.

use crate::app::state::{AppState, CurveMode};
use crate::core::{bezier_segments, catmull_rom_control_points, sample_segments};

/// Setzt den Kurvenmodus.
///
/// Bezier und Catmull-Rom setzen den Subdivision-Stufenzähler zurück;
/// die Subdivision-Stufe selbst rückt nur über
/// `advance_subdivision_level` vor.
pub fn set_mode(state: &mut AppState, mode: CurveMode) {
    state.editor.curve_mode = mode;
    if mode != CurveMode::Subdivision {
        state.editor.subdivision_level = 0;
    }
    log::debug!("Kurvenmodus: {:?}", mode);
}

/// Rückt den Subdivision-Stufenzähler vor (wrappt nach Stufe 5 auf 0).
pub fn advance_subdivision_level(state: &mut AppState) {
    state.editor.advance_subdivision_level();
    log::debug!("Subdivision-Stufe: {}", state.editor.subdivision_level);
}

/// Berechnet die Puffer des aktiven Modus aus dem Live-Polygon neu.
///
/// Bewusst bedingungslos jeden Tick (keine Dirty-Flags): die Quelle kann
/// sich durch einen laufenden Drag jederzeit geändert haben, und bei der
/// Subdivision muss die gesamte Vorgänger-Kette aktuell sein.
pub fn recompute(state: &mut AppState) {
    match state.editor.curve_mode {
        CurveMode::None => {}
        CurveMode::Subdivision => {
            state.derived.subdivision.recompute(
                &state.polygon,
                state.editor.subdivision_level,
                state.options.subdivision_color,
            );
        }
        CurveMode::Bezier => {
            state.derived.bezier = bezier_segments(&state.polygon, state.options.bezier_color);
        }
        CurveMode::CatmullRom => {
            state.derived.catmull_points =
                catmull_rom_control_points(&state.polygon, state.options.cr_point_color);
            state.derived.catmull_samples =
                sample_segments(&state.derived.catmull_points, state.options.cr_curve_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SAMPLES_PER_SEGMENT;

    #[test]
    fn test_recompute_subdivision_fills_chain_up_to_active_level() {
        let mut state = AppState::new();
        set_mode(&mut state, CurveMode::Subdivision);
        advance_subdivision_level(&mut state);
        advance_subdivision_level(&mut state);
        recompute(&mut state);

        assert_eq!(state.derived.subdivision.computed_levels(), 2);
        let level2 = state.derived.subdivision.level(2).expect("Stufe 2 da");
        assert_eq!(level2.len(), state.polygon.len() * 4);
    }

    #[test]
    fn test_switching_to_bezier_resets_subdivision_counter() {
        let mut state = AppState::new();
        set_mode(&mut state, CurveMode::Subdivision);
        advance_subdivision_level(&mut state);
        assert_eq!(state.editor.subdivision_level, 1);

        set_mode(&mut state, CurveMode::Bezier);
        assert_eq!(state.editor.subdivision_level, 0);

        recompute(&mut state);
        assert_eq!(state.derived.bezier.len(), 4 * state.polygon.len());
    }

    #[test]
    fn test_recompute_catmull_rom_fills_both_stages() {
        let mut state = AppState::new();
        set_mode(&mut state, CurveMode::CatmullRom);
        recompute(&mut state);

        assert_eq!(state.derived.catmull_points.len(), 4 * state.polygon.len());
        assert_eq!(
            state.derived.catmull_samples.len(),
            SAMPLES_PER_SEGMENT * state.polygon.len()
        );
    }

    #[test]
    fn test_recompute_tracks_polygon_edits() {
        let mut state = AppState::new();
        set_mode(&mut state, CurveMode::CatmullRom);
        recompute(&mut state);
        let before = state.derived.catmull_samples[0].position;

        state.polygon.set_position_xy(0, 3.0, 2.0);
        recompute(&mut state);
        let after = state.derived.catmull_samples[0].position;

        // Segment 0 beginnt auf P[0]; die Kurve folgt dem Edit sofort.
        assert_ne!(before, after);
        assert_eq!(after.x, 3.0);
        assert_eq!(after.y, 2.0);
    }
}
