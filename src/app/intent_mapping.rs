//! Intent->Command Mapping: übersetzt Frontend-Eingaben in mutierende Schritte.

use super::state::{AppState, CurveMode};
use super::{AppCommand, AppIntent};

/// Bildet einen Intent auf null oder mehr Commands ab.
///
/// Das Mapping ist zustandsarm; die Tastensemantik steckt hier: die
/// Subdivision-Taste rückt zugleich die Stufe vor, Bezier und Catmull-Rom
/// setzen den Stufenzähler über `SetCurveMode` zurück.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PrimaryPressed => vec![AppCommand::ResolvePick],
        AppIntent::PrimaryReleased => vec![AppCommand::CommitDrag],
        AppIntent::CursorMoved { screen_pos } => {
            vec![AppCommand::SetCursorPosition { screen_pos }]
        }
        AppIntent::ToggleAxisModeRequested => vec![AppCommand::ToggleAxisMode],
        AppIntent::ToggleLoopRequested => vec![AppCommand::ToggleLoop],
        AppIntent::SubdivisionModeRequested => vec![
            AppCommand::SetCurveMode {
                mode: CurveMode::Subdivision,
            },
            AppCommand::AdvanceSubdivisionLevel,
        ],
        AppIntent::BezierModeRequested => vec![AppCommand::SetCurveMode {
            mode: CurveMode::Bezier,
        }],
        AppIntent::CatmullRomModeRequested => vec![AppCommand::SetCurveMode {
            mode: CurveMode::CatmullRom,
        }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
    }
}
