//! Zentrale Konfiguration für den CurveLab-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Anzeigewerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Viewport ────────────────────────────────────────────────────────

/// Standard-Viewport-Größe in Pixeln [Breite, Höhe].
pub const VIEWPORT_SIZE_DEFAULT: [f32; 2] = [1024.0, 768.0];

// ── Kurvenfarben ────────────────────────────────────────────────────

/// Farbe der Kontrollpolygon-Punkte (RGBA: Weiß).
pub const CONTROL_POINT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Farbe der Subdivision-Kurve (RGBA: Cyan).
pub const SUBDIVISION_COLOR: [f32; 4] = [0.0, 1.0, 1.0, 1.0];
/// Farbe der Bezier-Segmente (RGBA: Gelb).
pub const BEZIER_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Farbe der Catmull-Rom-Kontrollpunkte (RGBA: Rot).
pub const CR_POINT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Farbe der abgetasteten Catmull-Rom-Kurve (RGBA: Grün).
pub const CR_CURVE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

// ── Interaktions-Feedback ───────────────────────────────────────────

/// Feedback-Farbe während eines planaren XY-Drags (RGBA: Rot).
pub const DRAG_XY_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Feedback-Farbe während eines Tiefen-Drags (Z) (RGBA: Blau).
pub const DRAG_Z_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Farbe des Loop-Markers (RGBA: Gelb).
pub const LOOP_MARKER_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

// ── Picking ─────────────────────────────────────────────────────────

/// Reserviertes Identifier-Byte für "Hintergrund / keine Selektion".
pub const PICK_BACKGROUND_BYTE: u8 = 255;
/// Punktgröße in Pixeln, mit der der Identifier-Pass Punkte rastert.
pub const PICK_POINT_SIZE_PX: f32 = 10.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `curve_lab_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    /// Farbe der Kontrollpolygon-Punkte (RGBA)
    pub control_point_color: [f32; 4],
    /// Farbe der Subdivision-Kurve (RGBA)
    pub subdivision_color: [f32; 4],
    /// Farbe der Bezier-Segmente (RGBA)
    pub bezier_color: [f32; 4],
    /// Farbe der Catmull-Rom-Kontrollpunkte (RGBA)
    pub cr_point_color: [f32; 4],
    /// Farbe der abgetasteten Catmull-Rom-Kurve (RGBA)
    pub cr_curve_color: [f32; 4],
    /// Feedback-Farbe für planare XY-Drags (RGBA)
    pub drag_xy_color: [f32; 4],
    /// Feedback-Farbe für Tiefen-Drags (RGBA)
    pub drag_z_color: [f32; 4],
    /// Farbe des Loop-Markers (RGBA)
    pub loop_marker_color: [f32; 4],
    /// Punktgröße des Identifier-Passes in Pixeln
    #[serde(default = "default_pick_point_size_px")]
    pub pick_point_size_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            control_point_color: CONTROL_POINT_COLOR,
            subdivision_color: SUBDIVISION_COLOR,
            bezier_color: BEZIER_COLOR,
            cr_point_color: CR_POINT_COLOR,
            cr_curve_color: CR_CURVE_COLOR,
            drag_xy_color: DRAG_XY_COLOR,
            drag_z_color: DRAG_Z_COLOR,
            loop_marker_color: LOOP_MARKER_COLOR,
            pick_point_size_px: PICK_POINT_SIZE_PX,
        }
    }
}

/// Serde-Default für `pick_point_size_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_pick_point_size_px() -> f32 {
    PICK_POINT_SIZE_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_toml_roundtrip() {
        let mut options = EditorOptions::default();
        options.subdivision_color = [0.1, 0.2, 0.3, 1.0];

        let toml_str = toml::to_string_pretty(&options).expect("Serialisierung klappt");
        let parsed: EditorOptions = toml::from_str(&toml_str).expect("Parsen klappt");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_pick_point_size_falls_back_to_default() {
        let options = EditorOptions::default();
        let mut toml_str = toml::to_string_pretty(&options).expect("Serialisierung klappt");
        toml_str = toml_str
            .lines()
            .filter(|line| !line.starts_with("pick_point_size_px"))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed: EditorOptions = toml::from_str(&toml_str).expect("Parsen klappt");
        assert_eq!(parsed.pick_point_size_px, PICK_POINT_SIZE_PX);
    }

    #[test]
    fn test_load_from_missing_file_returns_defaults() {
        let options =
            EditorOptions::load_from_file(std::path::Path::new("/nonexistent/options.toml"));
        assert_eq!(options, EditorOptions::default());
    }
}
