//! Aufbau der Render-Szene aus dem Anwendungszustand.

use crate::app::state::{AppState, CurveMode};
use crate::core::CurveVertex;
use crate::shared::{Drawable, PrimitiveMode, RenderScene};

/// Fügt einen Puffer als geschlossenen Linienzug plus Punktwolke hinzu.
fn push_loop_with_points(drawables: &mut Vec<Drawable>, vertices: &[CurveVertex]) {
    if vertices.is_empty() {
        return;
    }
    drawables.push(Drawable::new(vertices.to_vec(), PrimitiveMode::LineLoop));
    drawables.push(Drawable::new(vertices.to_vec(), PrimitiveMode::Points));
}

/// Baut die Szene für den aktuellen Tick.
///
/// Reihenfolge wie in der Anzeige: Kontrollpolygon zuunterst, dann die
/// Puffer des aktiven Modus, die Loop-Markierung zuoberst.
pub fn build(state: &AppState) -> RenderScene {
    let mut drawables = Vec::new();

    let polygon_vertices: Vec<CurveVertex> = state
        .polygon
        .points()
        .iter()
        .map(|p| CurveVertex::new(p.position, p.color))
        .collect();
    push_loop_with_points(&mut drawables, &polygon_vertices);

    match state.editor.curve_mode {
        CurveMode::None => {}
        CurveMode::Subdivision => {
            if let Some(level) = state
                .derived
                .subdivision
                .level(state.editor.subdivision_level)
            {
                push_loop_with_points(&mut drawables, level);
            }
        }
        CurveMode::Bezier => {
            push_loop_with_points(&mut drawables, &state.derived.bezier);
        }
        CurveMode::CatmullRom => {
            push_loop_with_points(&mut drawables, &state.derived.catmull_points);
            if !state.derived.catmull_samples.is_empty() {
                drawables.push(Drawable::new(
                    state.derived.catmull_samples.clone(),
                    PrimitiveMode::LineLoop,
                ));
            }
        }
    }

    if state.editor.loop_enabled {
        if let Some(marker) = state.derived.loop_marker {
            drawables.push(Drawable::new(vec![marker], PrimitiveMode::Points));
        }
    }

    RenderScene {
        drawables,
        camera: state.view.camera.clone(),
        viewport_size: state.view.viewport_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::{curves, loop_marker};

    #[test]
    fn test_polygon_is_always_drawn() {
        let state = AppState::new();
        let scene = build(&state);
        // Linienzug + Punkte, je 10 Vertices.
        assert_eq!(scene.drawables.len(), 2);
        assert_eq!(scene.vertex_count(), 20);
        assert_eq!(scene.drawables[0].mode, PrimitiveMode::LineLoop);
        assert_eq!(scene.drawables[1].mode, PrimitiveMode::Points);
    }

    #[test]
    fn test_subdivision_level_zero_draws_nothing_extra() {
        let mut state = AppState::new();
        curves::set_mode(&mut state, CurveMode::Subdivision);
        curves::recompute(&mut state);
        let scene = build(&state);
        assert_eq!(scene.drawables.len(), 2);
    }

    #[test]
    fn test_active_subdivision_level_is_drawn() {
        let mut state = AppState::new();
        curves::set_mode(&mut state, CurveMode::Subdivision);
        curves::advance_subdivision_level(&mut state);
        curves::recompute(&mut state);
        let scene = build(&state);
        assert_eq!(scene.drawables.len(), 4);
        assert_eq!(scene.drawables[2].vertices.len(), 20);
    }

    #[test]
    fn test_catmull_rom_draws_points_and_curve() {
        let mut state = AppState::new();
        curves::set_mode(&mut state, CurveMode::CatmullRom);
        curves::recompute(&mut state);
        let scene = build(&state);
        // Polygonpaar + Kontrollpunktpaar + Kurvenlinienzug.
        assert_eq!(scene.drawables.len(), 5);
        assert_eq!(scene.drawables[4].mode, PrimitiveMode::LineLoop);
        assert_eq!(scene.drawables[4].vertices.len(), 150);
    }

    #[test]
    fn test_loop_marker_is_topmost_drawable() {
        let mut state = AppState::new();
        loop_marker::toggle(&mut state);
        loop_marker::advance(&mut state);
        let scene = build(&state);
        let top = scene.drawables.last().expect("Markierung vorhanden");
        assert_eq!(top.mode, PrimitiveMode::Points);
        assert_eq!(top.vertices.len(), 1);
        assert_eq!(top.vertices[0].color, state.options.loop_marker_color);
    }
}
