//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Die Puffer werden jeden Frame neu geschrieben; der Collaborator darf
//! keine Persistenz über Frames hinweg annehmen.

use crate::core::{CurveVertex, SceneCamera};

/// Primitive-Modus eines Drawables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    /// Geschlossener Linienzug über alle Vertices
    LineLoop,
    /// Einzelne Punkte
    Points,
}

/// Ein zeichenbares Objekt: Vertex-Puffer, Index-Liste und Primitive-Modus.
#[derive(Debug, Clone)]
pub struct Drawable {
    /// Geordneter Vertex-Puffer (Position + Farbe)
    pub vertices: Vec<CurveVertex>,
    /// Index-Liste (hier immer 0..n, der Vertrag verlangt sie explizit)
    pub indices: Vec<u16>,
    /// Primitive-Modus
    pub mode: PrimitiveMode,
}

impl Drawable {
    /// Erstellt ein Drawable mit fortlaufender Index-Liste.
    pub fn new(vertices: Vec<CurveVertex>, mode: PrimitiveMode) -> Self {
        let indices = (0..vertices.len() as u16).collect();
        Self {
            vertices,
            indices,
            mode,
        }
    }
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Alle Drawables dieses Frames, in Zeichenreihenfolge
    pub drawables: Vec<Drawable>,
    /// Kamera-Zustand für diesen Frame
    pub camera: SceneCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
}

impl RenderScene {
    /// Gibt die Gesamtzahl der Vertices über alle Drawables zurück.
    pub fn vertex_count(&self) -> usize {
        self.drawables.iter().map(|d| d.vertices.len()).sum()
    }
}
