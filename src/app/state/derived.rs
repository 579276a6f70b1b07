//! Abgeleitete Kurvenpuffer: jeder Tick überschreibt sie vollständig.

use crate::core::{CurveVertex, SubdivisionChain};

/// Alle aus dem Kontrollpolygon abgeleiteten Puffer.
///
/// Eigene, unabhängig allozierte Puffer pro Kurventyp (statt globaler
/// Festgrößen-Arrays); sie besitzen keinen eigenen Zustand und werden nie
/// direkt vom Benutzer mutiert.
#[derive(Debug, Clone, Default)]
pub struct DerivedBuffers {
    /// Subdivision-Kette (Stufe 1..=aktive Stufe)
    pub subdivision: SubdivisionChain,
    /// Bezier-Segmente (4 Vertices pro Kante)
    pub bezier: Vec<CurveVertex>,
    /// Catmull-Rom-Kontrollpunkte (4 Vertices pro Segment)
    pub catmull_points: Vec<CurveVertex>,
    /// Abgetastete Catmull-Rom-Kurve (15 Samples pro Segment)
    pub catmull_samples: Vec<CurveVertex>,
    /// Loop-Marker (einzelner Vertex, nur bei aktivem Loop)
    pub loop_marker: Option<CurveVertex>,
}

impl DerivedBuffers {
    /// Erstellt leere Puffer.
    pub fn new() -> Self {
        Self::default()
    }
}
