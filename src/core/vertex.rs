//! Gemeinsamer Vertex-Typ für alle abgeleiteten Kurvenpuffer.

use glam::Vec3;

/// Ein Eintrag in einem Kurvenpuffer: Position plus Anzeigefarbe.
///
/// Entspricht dem Vertex-Format des Render-Collaborators (XYZW + RGBA,
/// w implizit 1). Abgeleitete Puffer bestehen ausschließlich aus diesem Typ
/// und werden jeden Frame komplett neu geschrieben.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveVertex {
    /// Position im Modellraum
    pub position: Vec3,
    /// Anzeigefarbe (RGBA)
    pub color: [f32; 4],
}

impl CurveVertex {
    /// Erstellt einen neuen Vertex.
    pub fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self { position, color }
    }
}
