//! CurveLab Editor.
//!
//! Interaktiver 2D-Kurveneditor: Chaikin-Subdivision, stückweise kubische
//! Bezierkurve und Catmull-Rom-Spline über einem geschlossenen
//! Kontrollpolygon. Dieses Binary fährt eine Headless-Sitzung gegen den
//! Software-Pick-Rasterizer; ein GPU-Frontend dockt über die Traits in
//! `render` an.

use std::path::Path;

use curve_lab_editor::{
    AppController, AppIntent, AppState, EditorOptions, RenderScene, RenderSink,
    SoftwarePickSurface,
};
use glam::Vec2;

/// Render-Senke des Headless-Betriebs: protokolliert Frame-Statistiken,
/// statt Puffer auf eine GPU hochzuladen.
struct LoggingSink {
    frames: usize,
}

impl RenderSink for LoggingSink {
    fn submit(&mut self, scene: &RenderScene) -> anyhow::Result<()> {
        self.frames += 1;
        log::debug!(
            "Frame {}: {} Drawables, {} Vertices",
            self.frames,
            scene.drawables.len(),
            scene.vertex_count()
        );
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("CurveLab Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = EditorOptions::load_from_file(Path::new("curve_lab_editor.toml"));

    let mut state = AppState::new();
    state.options = options;
    let mut controller = AppController::new();
    let mut surface = SoftwarePickSurface::new(
        state.view.viewport_size[0] as u32,
        state.view.viewport_size[1] as u32,
    );
    let mut sink = LoggingSink { frames: 0 };

    // Alle drei Kurvenmodi einmal durchschalten.
    for intent in [
        AppIntent::SubdivisionModeRequested,
        AppIntent::SubdivisionModeRequested,
        AppIntent::BezierModeRequested,
        AppIntent::CatmullRomModeRequested,
    ] {
        controller.handle_intent(&mut state, &mut surface, intent)?;
        let scene = controller.tick(&mut state);
        log::info!(
            "Modus {:?}: {} Drawables, {} Vertices",
            state.editor.curve_mode,
            scene.drawables.len(),
            scene.vertex_count()
        );
        sink.submit(&scene)?;
    }

    // Punkt in der Fenstermitte picken und planar ziehen.
    let center = Vec2::new(
        state.view.viewport_size[0] / 2.0,
        state.view.viewport_size[1] / 2.0,
    );
    controller.handle_intent(
        &mut state,
        &mut surface,
        AppIntent::CursorMoved { screen_pos: center },
    )?;
    controller.handle_intent(&mut state, &mut surface, AppIntent::PrimaryPressed)?;
    log::info!("Pick: {}", state.selection.status_message);

    controller.handle_intent(
        &mut state,
        &mut surface,
        AppIntent::CursorMoved {
            screen_pos: center + Vec2::new(64.0, -48.0),
        },
    )?;
    let scene = controller.tick(&mut state);
    sink.submit(&scene)?;
    controller.handle_intent(&mut state, &mut surface, AppIntent::PrimaryReleased)?;

    // Loop-Animation einen Umlauf weit laufen lassen.
    controller.handle_intent(&mut state, &mut surface, AppIntent::ToggleLoopRequested)?;
    for _ in 0..16 {
        let scene = controller.tick(&mut state);
        sink.submit(&scene)?;
    }
    if let Some(marker) = state.derived.loop_marker {
        log::info!("Loop-Markierung bei {:?}", marker.position);
    }

    log::info!("Sitzung beendet, {} Kommandos im Log", state.command_log.len());
    Ok(())
}
