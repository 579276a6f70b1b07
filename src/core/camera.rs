//! Orthographische Szenen-Kamera mit Unprojection für Drag-Interaktion.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Kamera mit fester Orthographie und fester Blickrichtung.
///
/// Liefert View- und Projektionsmatrix für den Render-Collaborator und die
/// Unprojection von Fensterkoordinaten zurück in den Modellraum.
#[derive(Debug, Clone)]
pub struct SceneCamera {
    projection: Mat4,
    view: Mat4,
}

impl SceneCamera {
    /// Sichtbarer Weltbereich horizontal: [-4, 4].
    pub const ORTHO_HALF_WIDTH: f32 = 4.0;
    /// Sichtbarer Weltbereich vertikal: [-3, 3].
    pub const ORTHO_HALF_HEIGHT: f32 = 3.0;
    /// Nahe Clipping-Ebene.
    pub const NEAR: f32 = 0.0;
    /// Ferne Clipping-Ebene.
    pub const FAR: f32 = 100.0;

    /// Erstellt die Kamera: Ortho-Projektion, Blick von (0,0,-5) auf den Ursprung.
    pub fn new() -> Self {
        Self {
            projection: Mat4::orthographic_rh_gl(
                -Self::ORTHO_HALF_WIDTH,
                Self::ORTHO_HALF_WIDTH,
                -Self::ORTHO_HALF_HEIGHT,
                Self::ORTHO_HALF_HEIGHT,
                Self::NEAR,
                Self::FAR,
            ),
            view: Mat4::look_at_rh(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec3::Y),
        }
    }

    /// Gibt die Projektionsmatrix zurück (für Shader).
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Gibt die View-Matrix zurück (für Shader).
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Projiziert einen Modellraum-Punkt in Fensterkoordinaten (Ursprung oben links).
    ///
    /// Gegenstück zur Unprojection; wird vom Identifier-Pass des
    /// Software-Rasterizers verwendet.
    pub fn project_to_window(&self, position: Vec3, viewport_size: [f32; 2]) -> Vec2 {
        let clip = self.projection * self.view * Vec4::from((position, 1.0));
        let ndc = clip.truncate() / clip.w.max(f32::EPSILON);
        Vec2::new(
            (ndc.x * 0.5 + 0.5) * viewport_size[0],
            (1.0 - (ndc.y * 0.5 + 0.5)) * viewport_size[1],
        )
    }

    /// Standard-Unprojection: Fensterkoordinaten → Modellraum.
    ///
    /// `window` ist (x, y, depth) mit y nach oben und depth in [0, 1],
    /// `modelview` die zu invertierende Modell-(bzw. ModelView-)Matrix,
    /// `viewport` das Rechteck [x, y, Breite, Höhe].
    pub fn unproject(&self, window: Vec3, modelview: Mat4, viewport: [f32; 4]) -> Vec3 {
        let inverse = (self.projection * modelview).inverse();
        let ndc = Vec3::new(
            (window.x - viewport[0]) / viewport[2] * 2.0 - 1.0,
            (window.y - viewport[1]) / viewport[3] * 2.0 - 1.0,
            window.z * 2.0 - 1.0,
        );
        let world = inverse * Vec4::from((ndc, 1.0));
        if world.w.abs() > f32::EPSILON {
            world.truncate() / world.w
        } else {
            world.truncate()
        }
    }

    /// Unprojiziert die Cursor-Position (Ursprung oben links) in den Modellraum.
    ///
    /// Die View-Matrix geht bewusst nicht in die Inversion ein: der Blick von
    /// −Z spiegelt die x-Achse, die Fenster-y-Achse wächst nach unten. Beide
    /// Spiegelungen werden stattdessen durch (Breite − x, Höhe − y)
    /// kompensiert, mit Tiefe 0 auf der nahen Ebene.
    pub fn unproject_cursor(&self, cursor: Vec2, viewport_size: [f32; 2]) -> Vec3 {
        let window = Vec3::new(
            viewport_size[0] - cursor.x,
            viewport_size[1] - cursor.y,
            0.0,
        );
        self.unproject(
            window,
            Mat4::IDENTITY,
            [0.0, 0.0, viewport_size[0], viewport_size[1]],
        )
    }
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self::new()
    }
}
