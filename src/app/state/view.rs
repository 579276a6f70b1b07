//! View-bezogener Anwendungszustand.

use glam::Vec2;

use crate::core::SceneCamera;
use crate::shared::VIEWPORT_SIZE_DEFAULT;

/// Kamera, Viewport und Eingabe-Cursor.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Szenen-Kamera (Transform-Provider für Rendering und Unprojection)
    pub camera: SceneCamera,
    /// Aktuelle Viewport-Größe in Pixel [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Letzte bekannte Cursor-Position in Fensterkoordinaten (Ursprung oben links)
    pub cursor_pos: Vec2,
    /// Ob die primäre Maustaste gehalten wird (kontinuierlicher Drag)
    pub primary_button_down: bool,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: SceneCamera::new(),
            viewport_size: VIEWPORT_SIZE_DEFAULT,
            cursor_pos: Vec2::new(
                VIEWPORT_SIZE_DEFAULT[0] / 2.0,
                VIEWPORT_SIZE_DEFAULT[1] / 2.0,
            ),
            primary_button_down: false,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
