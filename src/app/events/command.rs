use glam::Vec2;

use crate::app::state::CurveMode;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Pick über den Identifier-Pass auflösen (synchroner Readback)
    ResolvePick,
    /// Drag abschließen: Farb-Schnappschuss wiederherstellen, Position behalten
    CommitDrag,
    /// Cursor-Position aktualisieren
    SetCursorPosition { screen_pos: Vec2 },
    /// Achsenmodus umschalten
    ToggleAxisMode,
    /// Loop-Marker umschalten
    ToggleLoop,
    /// Kurvenmodus setzen
    SetCurveMode { mode: CurveMode },
    /// Subdivision-Stufenzähler vorrücken (wrappt nach Stufe 5 auf 0)
    AdvanceSubdivisionLevel,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
}
