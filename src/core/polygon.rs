//! Das editierbare Kontrollpolygon: feste Anzahl Punkte, zyklisch geordnet.

use glam::Vec3;

/// Zyklischer Vorgänger-Index in einer Sequenz der Länge `len`.
pub fn cyclic_prev(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

/// Zyklischer Nachfolger-Index in einer Sequenz der Länge `len`.
pub fn cyclic_next(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Zyklischer Über-Nachfolger-Index (i+2) in einer Sequenz der Länge `len`.
pub fn cyclic_next2(index: usize, len: usize) -> usize {
    (index + 2) % len
}

/// Ein einzelner Kontrollpunkt: Position im Modellraum plus Anzeigefarbe.
///
/// Die Farbe dient nur der Darstellung und als temporäres Selektions-Feedback
/// während eines Drags; sie beeinflusst keine Geometrieberechnung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position (x, y, z) im Modellraum
    pub position: Vec3,
    /// Anzeigefarbe (RGBA)
    pub color: [f32; 4],
}

/// Das geschlossene Kontrollpolygon mit fester Punktanzahl.
///
/// Die Sequenz ist zyklisch: Nachbarn von Index i sind (i−1) mod N und
/// (i+1) mod N. Die Länge ist für die Lebensdauer der Session fix; die
/// Indizes sind stabile Identifikatoren für das Picking.
#[derive(Debug, Clone)]
pub struct ControlPolygon {
    points: Vec<ControlPoint>,
}

/// Referenz-Startgeometrie: 10 Punkte, alle weiß.
const INITIAL_POSITIONS: [[f32; 2]; ControlPolygon::POINT_COUNT] = [
    [1.0, 0.5],
    [0.5, 1.5],
    [-0.5, 1.5],
    [-1.0, 0.5],
    [0.0, 0.0],
    [1.0, -0.5],
    [0.5, -1.5],
    [-0.5, -1.5],
    [-1.0, -0.5],
    [0.0, 0.0],
];

impl ControlPolygon {
    /// Feste Punktanzahl N.
    pub const POINT_COUNT: usize = 10;

    /// Erstellt das Polygon mit der Referenz-Startgeometrie.
    pub fn new() -> Self {
        let points = INITIAL_POSITIONS
            .iter()
            .map(|&[x, y]| ControlPoint {
                position: Vec3::new(x, y, 0.0),
                color: [1.0, 1.0, 1.0, 1.0],
            })
            .collect();
        Self { points }
    }

    /// Gibt die Punktanzahl zurück (immer `POINT_COUNT`).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn das Polygon leer ist (nie der Fall).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Read-only Zugriff auf alle Punkte.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Gibt einen einzelnen Punkt zurück, falls der Index gültig ist.
    pub fn point(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Sammelt alle Positionen als eigenen Vektor (Quelle für Generatoren).
    pub fn positions(&self) -> Vec<Vec3> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Zyklischer Vorgänger von Index i.
    pub fn prev(&self, index: usize) -> usize {
        cyclic_prev(index, self.points.len())
    }

    /// Zyklischer Nachfolger von Index i.
    pub fn next(&self, index: usize) -> usize {
        cyclic_next(index, self.points.len())
    }

    /// Zyklischer Über-Nachfolger (i+2) von Index i.
    pub fn next2(&self, index: usize) -> usize {
        cyclic_next2(index, self.points.len())
    }

    /// Setzt x und y eines Punkts (z bleibt erhalten).
    ///
    /// Gibt `false` zurück und ändert nichts, wenn der Index ungültig ist.
    pub fn set_position_xy(&mut self, index: usize, x: f32, y: f32) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        point.position.x = x;
        point.position.y = y;
        true
    }

    /// Setzt die z-Koordinate eines Punkts (x und y bleiben erhalten).
    pub fn set_z(&mut self, index: usize, z: f32) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        point.position.z = z;
        true
    }

    /// Setzt die Anzeigefarbe eines Punkts.
    pub fn set_color(&mut self, index: usize, color: [f32; 4]) -> bool {
        let Some(point) = self.points.get_mut(index) else {
            return false;
        };
        point.color = color;
        true
    }

    /// Gibt die Anzeigefarbe eines Punkts zurück, falls der Index gültig ist.
    pub fn color(&self, index: usize) -> Option<[f32; 4]> {
        self.points.get(index).map(|p| p.color)
    }
}

impl Default for ControlPolygon {
    fn default() -> Self {
        Self::new()
    }
}
