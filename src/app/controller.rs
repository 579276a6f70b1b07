//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::render::PickSurface;
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Die Pick-Fläche wandert als Kontext mit, weil `ResolvePick` den
    /// Identifier-Pass synchron zeichnen und auslesen muss.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        pick_surface: &mut dyn PickSurface,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, pick_surface, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an die Use-Cases in `use_cases/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        pick_surface: &mut dyn PickSurface,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::use_cases;

        match command {
            // === Selektion & Drag ===
            AppCommand::ResolvePick => use_cases::pick::resolve(state, pick_surface),
            AppCommand::CommitDrag => use_cases::drag::commit(state),
            AppCommand::ToggleAxisMode => use_cases::drag::toggle_axis(state),

            // === Kurven ===
            AppCommand::SetCurveMode { mode } => use_cases::curves::set_mode(state, mode),
            AppCommand::AdvanceSubdivisionLevel => {
                use_cases::curves::advance_subdivision_level(state)
            }

            // === Loop-Animation ===
            AppCommand::ToggleLoop => use_cases::loop_marker::toggle(state),

            // === Viewport & Cursor ===
            AppCommand::SetViewportSize { size } => use_cases::view::set_viewport_size(state, size),
            AppCommand::SetCursorPosition { screen_pos } => {
                use_cases::view::set_cursor(state, screen_pos)
            }
        }

        Ok(())
    }

    /// Rechnet einen Frame: Drag fortschreiben, Kurvenpuffer neu
    /// berechnen, Loop-Markierung vorrücken, Szene bauen.
    pub fn tick(&mut self, state: &mut AppState) -> RenderScene {
        if state.view.primary_button_down {
            super::use_cases::drag::update(state);
        }
        super::use_cases::curves::recompute(state);
        super::use_cases::loop_marker::advance(state);
        render_scene::build(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::CurveMode;
    use crate::render::SoftwarePickSurface;

    #[test]
    fn test_subdivision_intent_sets_mode_and_advances_level() {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        let mut surface = SoftwarePickSurface::new(1024, 768);

        controller
            .handle_intent(&mut state, &mut surface, AppIntent::SubdivisionModeRequested)
            .unwrap();

        assert_eq!(state.editor.curve_mode, CurveMode::Subdivision);
        assert_eq!(state.editor.subdivision_level, 1);
        assert_eq!(state.command_log.len(), 2);
    }

    #[test]
    fn test_tick_builds_scene_for_active_mode() {
        let mut controller = AppController::new();
        let mut state = AppState::new();
        let mut surface = SoftwarePickSurface::new(1024, 768);

        controller
            .handle_intent(&mut state, &mut surface, AppIntent::BezierModeRequested)
            .unwrap();
        let scene = controller.tick(&mut state);

        // Polygonpaar + Bezier-Paar.
        assert_eq!(scene.drawables.len(), 4);
        assert_eq!(scene.drawables[2].vertices.len(), 40);
    }
}
