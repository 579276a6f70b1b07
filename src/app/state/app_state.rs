use crate::app::CommandLog;
use crate::core::ControlPolygon;
use crate::shared::EditorOptions;

use super::{DerivedBuffers, EditorState, SelectionState, ViewState};

/// Hauptzustand der Anwendung.
///
/// Single-Writer: der Frame-Tick ist der einzige Mutator, es gibt keine
/// Nebenläufigkeit und damit keine Locking-Disziplin.
pub struct AppState {
    /// Das editierbare Kontrollpolygon (einzige Quelle aller Kurven)
    pub polygon: ControlPolygon,
    /// Abgeleitete Kurvenpuffer (jeden Tick neu geschrieben)
    pub derived: DerivedBuffers,
    /// View-State (Kamera, Viewport, Cursor)
    pub view: ViewState,
    /// Selektions- und Drag-State
    pub selection: SelectionState,
    /// Kurvenmodus, Subdivision-Stufe und Loop-Animator
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Punktgrößen)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen App-State mit der Referenz-Startgeometrie.
    pub fn new() -> Self {
        Self {
            polygon: ControlPolygon::new(),
            derived: DerivedBuffers::new(),
            view: ViewState::new(),
            selection: SelectionState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
