//! Kurvenmodus-, Subdivision- und Loop-Zustand.

use crate::core::MAX_SUBDIVISION_LEVEL;

/// Aktiver Kurvenmodus (welche abgeleitete Darstellung gezeichnet wird).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveMode {
    /// Nur das Kontrollpolygon (Startzustand)
    #[default]
    None,
    /// Chaikin-Subdivision der aktiven Stufe
    Subdivision,
    /// Kubische Bezier-Segmente
    Bezier,
    /// Catmull-Rom-Kontrollpunkte plus abgetastete Kurve
    CatmullRom,
}

/// Editor-Zustand: Modus, Subdivision-Stufenzähler und Loop-Animator.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Aktiver Kurvenmodus
    pub curve_mode: CurveMode,
    /// Subdivision-Stufenzähler (0..=5; 0 = keine Kurve gezeichnet)
    pub subdivision_level: usize,
    /// Ob der Loop-Marker aktiv ist
    pub loop_enabled: bool,
    /// Sample-Cursor des Loop-Markers (0..Gesamtzahl der Samples, wrappt)
    pub loop_cursor: usize,
}

impl EditorState {
    /// Erstellt den Startzustand (kein Modus, Stufe 0, Loop aus).
    pub fn new() -> Self {
        Self {
            curve_mode: CurveMode::None,
            subdivision_level: 0,
            loop_enabled: false,
            loop_cursor: 0,
        }
    }

    /// Rückt den Subdivision-Stufenzähler vor; nach Stufe 5 folgt 0.
    pub fn advance_subdivision_level(&mut self) {
        self.subdivision_level = (self.subdivision_level + 1) % (MAX_SUBDIVISION_LEVEL + 1);
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdivision_level_wraps_after_five() {
        let mut editor = EditorState::new();
        for expected in [1, 2, 3, 4, 5, 0, 1] {
            editor.advance_subdivision_level();
            assert_eq!(editor.subdivision_level, expected);
        }
    }
}
