//! Chaikin-Corner-Cutting-Subdivision über dem geschlossenen Kontrollpolygon.

use glam::Vec3;

use super::polygon::{cyclic_next, cyclic_prev, ControlPolygon};
use super::vertex::CurveVertex;

/// Maximale Subdivision-Stufe; der Stufenzähler läuft 0..=5 und springt
/// danach auf 0 zurück (keine Kurve gezeichnet).
pub const MAX_SUBDIVISION_LEVEL: usize = 5;

/// Ein Chaikin-Schritt: verdoppelt die Punktanzahl einer zyklischen Quelle.
///
/// Pro Quellpunkt i (mit prev = S[(i−1) mod M], cur = S[i], next = S[(i+1) mod M]):
///   D[2i]   = (4·prev + 4·cur) / 8
///   D[2i+1] = (prev + 6·cur + next) / 8
/// Nur x und y werden verfeinert; z wird auf 0 emittiert (2D-Stufe).
pub fn chaikin_step(source: &[Vec3], color: [f32; 4]) -> Vec<CurveVertex> {
    let len = source.len();
    let mut refined = Vec::with_capacity(len * 2);

    for i in 0..len {
        let prev = source[cyclic_prev(i, len)];
        let cur = source[i];
        let next = source[cyclic_next(i, len)];

        let corner_x = (4.0 * prev.x + 4.0 * cur.x) / 8.0;
        let corner_y = (4.0 * prev.y + 4.0 * cur.y) / 8.0;
        refined.push(CurveVertex::new(
            Vec3::new(corner_x, corner_y, 0.0),
            color,
        ));

        let smooth_x = (prev.x + 6.0 * cur.x + next.x) / 8.0;
        let smooth_y = (prev.y + 6.0 * cur.y + next.y) / 8.0;
        refined.push(CurveVertex::new(
            Vec3::new(smooth_x, smooth_y, 0.0),
            color,
        ));
    }

    refined
}

/// Die iterierte Subdivision-Kette: Stufe k wird ausschließlich aus Stufe k−1
/// abgeleitet (Stufe 0 ist das Kontrollpolygon).
///
/// Die Puffer aller Stufen bis zur aktiven werden jeden Tick komplett neu
/// berechnet, damit jede Stufe auf einem aktuellen Vorgänger basiert — auch
/// wenn nur die aktive Stufe gezeichnet wird.
#[derive(Debug, Clone, Default)]
pub struct SubdivisionChain {
    levels: Vec<Vec<CurveVertex>>,
}

impl SubdivisionChain {
    /// Erstellt eine leere Kette.
    pub fn new() -> Self {
        Self { levels: Vec::new() }
    }

    /// Berechnet die Stufen 1..=`active_level` aus dem aktuellen Polygon neu.
    ///
    /// `active_level` 0 leert die Kette (nichts zu zeichnen). Werte über
    /// `MAX_SUBDIVISION_LEVEL` werden abgeschnitten.
    pub fn recompute(&mut self, polygon: &ControlPolygon, active_level: usize, color: [f32; 4]) {
        self.levels.clear();
        let target = active_level.min(MAX_SUBDIVISION_LEVEL);
        if target == 0 {
            return;
        }

        let mut source = polygon.positions();
        for _ in 0..target {
            let refined = chaikin_step(&source, color);
            source = refined.iter().map(|v| v.position).collect();
            self.levels.push(refined);
        }
    }

    /// Gibt den Puffer einer Stufe zurück (1..=aktive Stufe), sonst `None`.
    pub fn level(&self, level: usize) -> Option<&[CurveVertex]> {
        if level == 0 {
            return None;
        }
        self.levels.get(level - 1).map(Vec::as_slice)
    }

    /// Gibt die höchste aktuell berechnete Stufe zurück.
    pub fn computed_levels(&self) -> usize {
        self.levels.len()
    }
}
