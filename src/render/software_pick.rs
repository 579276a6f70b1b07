//! Software-Rasterizer für den Identifier-Pass.
//!
//! Ersetzt im Headless-Betrieb (und in den Tests) die Off-Screen-Rasterung
//! des GPU-Frontends: Punkte werden als Quadrate fester Pixelgröße in einen
//! RGBA-Puffer gestempelt, dessen Rotkanal das Identifier-Byte trägt.

use anyhow::bail;
use glam::Vec3;

use super::PickSurface;
use crate::core::SceneCamera;
use crate::shared::PICK_BACKGROUND_BYTE;

/// CPU-seitiger Identifier-Puffer mit Ursprung oben links.
#[derive(Debug, Clone)]
pub struct SoftwarePickSurface {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl SoftwarePickSurface {
    /// Erstellt einen Puffer der angegebenen Größe, gefüllt mit Hintergrund.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[PICK_BACKGROUND_BYTE; 4]; (width * height) as usize],
        }
    }

    /// Gibt die Puffer-Breite zurück.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Gibt die Puffer-Höhe zurück.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn clear_to_background(&mut self) {
        self.pixels.fill([PICK_BACKGROUND_BYTE; 4]);
    }

    fn resize_if_needed(&mut self, viewport_size: [f32; 2]) {
        let width = viewport_size[0].max(1.0) as u32;
        let height = viewport_size[1].max(1.0) as u32;
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.pixels = vec![[PICK_BACKGROUND_BYTE; 4]; (width * height) as usize];
        }
    }

    fn stamp_point(&mut self, center_x: f32, center_y: f32, byte: u8, point_size_px: f32) {
        let half = (point_size_px / 2.0).max(0.5);
        let min_x = (center_x - half).floor().max(0.0) as i64;
        let max_x = (center_x + half).ceil().min(self.width as f32 - 1.0) as i64;
        let min_y = (center_y - half).floor().max(0.0) as i64;
        let max_y = (center_y + half).ceil().min(self.height as f32 - 1.0) as i64;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let index = (y as u32 * self.width + x as u32) as usize;
                self.pixels[index] = [byte, 0, 0, 255];
            }
        }
    }
}

impl PickSurface for SoftwarePickSurface {
    fn draw_identifier_pass(
        &mut self,
        positions: &[Vec3],
        id_colors: &[f32],
        camera: &SceneCamera,
        viewport_size: [f32; 2],
        point_size_px: f32,
    ) -> anyhow::Result<()> {
        if positions.len() != id_colors.len() {
            bail!(
                "Identifier-Pass: {} Positionen, aber {} Identifier-Farben",
                positions.len(),
                id_colors.len()
            );
        }

        self.resize_if_needed(viewport_size);
        self.clear_to_background();

        // Spätere Punkte überschreiben frühere, wie beim Rastern in Draw-Reihenfolge.
        for (position, id_color) in positions.iter().zip(id_colors) {
            let window = camera.project_to_window(*position, viewport_size);
            let byte = (id_color * 255.0).round().clamp(0.0, 255.0) as u8;
            self.stamp_point(window.x, window.y, byte, point_size_px);
        }

        Ok(())
    }

    fn finish_and_read_pixel(&mut self, x: u32, y: u32) -> anyhow::Result<[u8; 4]> {
        // CPU-Puffer: "finish" ist hier trivial, der Vertrag bleibt synchron.
        if x >= self.width || y >= self.height {
            bail!(
                "Pixel ({}, {}) liegt außerhalb des {}x{}-Puffers",
                x,
                y,
                self.width,
                self.height
            );
        }
        Ok(self.pixels[(y * self.width + x) as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ControlPolygon;

    const VIEWPORT: [f32; 2] = [1024.0, 768.0];

    fn id_colors(n: usize) -> Vec<f32> {
        (0..n).map(|i| i as f32 / 255.0).collect()
    }

    #[test]
    fn test_background_reads_as_sentinel() {
        let mut surface = SoftwarePickSurface::new(64, 64);
        let pixel = surface.finish_and_read_pixel(0, 0).expect("Pixel im Puffer");
        assert_eq!(pixel[0], PICK_BACKGROUND_BYTE);
    }

    #[test]
    fn test_point_stamps_its_identifier_byte() {
        let polygon = ControlPolygon::new();
        let camera = SceneCamera::new();
        let mut surface = SoftwarePickSurface::new(1024, 768);

        let positions = polygon.positions();
        surface
            .draw_identifier_pass(&positions, &id_colors(positions.len()), &camera, VIEWPORT, 10.0)
            .expect("Identifier-Pass klappt");

        // Punkt 0 liegt bei (1.0, 0.5); sein Fensterpixel muss Byte 0 tragen.
        let window = camera.project_to_window(positions[0], VIEWPORT);
        let pixel = surface
            .finish_and_read_pixel(window.x as u32, window.y as u32)
            .expect("Pixel im Puffer");
        assert_eq!(pixel[0], 0);
    }

    #[test]
    fn test_later_points_overdraw_earlier_ones() {
        // Punkt 4 und 9 liegen beide im Ursprung; Index 9 zeichnet zuletzt.
        let polygon = ControlPolygon::new();
        let camera = SceneCamera::new();
        let mut surface = SoftwarePickSurface::new(1024, 768);

        let positions = polygon.positions();
        surface
            .draw_identifier_pass(&positions, &id_colors(positions.len()), &camera, VIEWPORT, 10.0)
            .expect("Identifier-Pass klappt");

        let window = camera.project_to_window(positions[9], VIEWPORT);
        let pixel = surface
            .finish_and_read_pixel(window.x as u32, window.y as u32)
            .expect("Pixel im Puffer");
        assert_eq!(pixel[0], 9);
    }

    #[test]
    fn test_mismatched_id_array_is_rejected() {
        let camera = SceneCamera::new();
        let mut surface = SoftwarePickSurface::new(64, 64);
        let result = surface.draw_identifier_pass(
            &[Vec3::ZERO, Vec3::X],
            &[0.0],
            &camera,
            [64.0, 64.0],
            4.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_bounds_readback_fails() {
        let mut surface = SoftwarePickSurface::new(64, 64);
        assert!(surface.finish_and_read_pixel(64, 0).is_err());
    }
}
