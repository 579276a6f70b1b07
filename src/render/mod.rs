//! Schnittstellen zu den externen Render-Collaborators.
//!
//! Der Core kennt keine GPU: Fenster, Puffer-Upload und Shader liegen beim
//! Frontend. Dieses Modul definiert nur die Verträge, die das Frontend
//! erfüllen muss, plus einen Software-Rasterizer für den Identifier-Pass
//! als Referenz-Implementierung (Headless-Betrieb und Tests).

mod software_pick;

pub use software_pick::SoftwarePickSurface;

use glam::Vec3;

use crate::core::SceneCamera;
use crate::shared::RenderScene;

/// Senke für das normale Frame-Rendering.
///
/// Nimmt pro Drawable einen Vertex-Puffer (Position + Farbe), eine
/// Index-Liste und den Primitive-Modus entgegen. Die Puffer werden jeden
/// Frame neu übergeben, da sich die Geometrie jeden Frame ändert.
pub trait RenderSink {
    /// Übergibt die komplette Szene eines Frames.
    fn submit(&mut self, scene: &RenderScene) -> anyhow::Result<()>;
}

/// Senke für den Identifier-Pass des Pickings.
///
/// Die Leseoperation ist bewusst synchron: das Pixel muss den gerade
/// gezeichneten Pass widerspiegeln, daher wartet `finish_and_read_pixel`
/// auf den Abschluss aller Zeichenbefehle (voller Pipeline-Stall — der
/// einzige latenzkritische Punkt des Designs).
pub trait PickSurface {
    /// Zeichnet das Kontrollpolygon mit Identifier-Farben.
    ///
    /// `id_colors` ist das parallele Array der normierten Identifier
    /// (Index i kodiert als i/255); Fensterkoordinaten haben ihren
    /// Ursprung oben links.
    fn draw_identifier_pass(
        &mut self,
        positions: &[Vec3],
        id_colors: &[f32],
        camera: &SceneCamera,
        viewport_size: [f32; 2],
        point_size_px: f32,
    ) -> anyhow::Result<()>;

    /// Wartet auf alle Zeichenbefehle und liest das Pixel an (x, y) zurück.
    fn finish_and_read_pixel(&mut self, x: u32, y: u32) -> anyhow::Result<[u8; 4]>;
}
