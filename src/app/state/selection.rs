//! Selektions- und Drag-Zustand.

/// Achsenmodus, der die Interpretation eines Drags bestimmt.
///
/// Unabhängig vom Selektionsautomaten umschaltbar, auch mitten im Drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAxis {
    /// Unprojizierte x/y schreiben in die Punktposition (XY-Ebene)
    Planar,
    /// Unprojiziertes y schreibt in die z-Koordinate (Tiefe)
    Depth,
}

/// Expliziter Selektionsautomat.
///
/// "Keine Selektion" ist ein eigener Zustand, kein Vergleich gegen das
/// Hintergrund-Byte 255 oder einen Sentinel-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// Keine aktive Selektion
    Idle,
    /// Ein Kontrollpunkt ist gegriffen; `saved_color` ist der
    /// Farb-Schnappschuss vom Selektionszeitpunkt (wird beim Loslassen
    /// wiederhergestellt, die Position bleibt committed).
    Selected {
        /// Index des gegriffenen Kontrollpunkts
        index: usize,
        /// Anzeigefarbe vor dem Drag
        saved_color: [f32; 4],
    },
}

impl Selection {
    /// Gibt den gegriffenen Index zurück, falls selektiert.
    pub fn picked_index(&self) -> Option<usize> {
        match self {
            Selection::Idle => None,
            Selection::Selected { index, .. } => Some(*index),
        }
    }

    /// Gibt `true` zurück, wenn ein Punkt gegriffen ist.
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected { .. })
    }
}

/// Auswahlbezogener Anwendungszustand.
#[derive(Debug, Clone)]
pub struct SelectionState {
    /// Aktueller Zustand des Selektionsautomaten
    pub selection: Selection,
    /// Achsenmodus für Drags
    pub drag_axis: DragAxis,
    /// Statusmeldung des letzten Picks ("background" oder "point i"),
    /// zur Anzeige durch das Frontend
    pub status_message: String,
}

impl SelectionState {
    /// Erstellt den Standard-Selektionszustand.
    pub fn new() -> Self {
        Self {
            selection: Selection::Idle,
            drag_axis: DragAxis::Planar,
            status_message: String::new(),
        }
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
