//! Kubische Bezier-Approximation: vier Kontrollpunkte pro Polygonkante.

use glam::Vec3;

use super::polygon::ControlPolygon;
use super::vertex::CurveVertex;

/// Mittelpunkt zweier xy-Paare (z bleibt 0).
fn midpoint_xy(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0, 0.0)
}

/// Berechnet die geschlossene Kette kubischer Bezier-Segmente.
///
/// Pro Kante i (Nachbarn prev, cur, next, next2 über den zyklischen Accessor):
///   c1 = (2·cur + next) / 3
///   c2 = (cur + 2·next) / 3
///   c0 = Mittelpunkt( (prev + 2·cur)/3 , c1 )
///   c3 = Mittelpunkt( (2·next + next2)/3 , c2 )
/// Ausgabe sind 4·N Vertices in Segment-Reihenfolge [c0, c1, c2, c3]; die
/// Segmente teilen sich keine Vertices (kein Aliasing über Segmentgrenzen).
pub fn bezier_segments(polygon: &ControlPolygon, color: [f32; 4]) -> Vec<CurveVertex> {
    let n = polygon.len();
    let points = polygon.points();
    let mut segments = Vec::with_capacity(4 * n);

    for i in 0..n {
        let prev = points[polygon.prev(i)].position;
        let cur = points[i].position;
        let next = points[polygon.next(i)].position;
        let next2 = points[polygon.next2(i)].position;

        let c1 = Vec3::new(
            (2.0 * cur.x + next.x) / 3.0,
            (2.0 * cur.y + next.y) / 3.0,
            0.0,
        );
        let c2 = Vec3::new(
            (cur.x + 2.0 * next.x) / 3.0,
            (cur.y + 2.0 * next.y) / 3.0,
            0.0,
        );

        // Knoten-Glättung: Ferguson-artige Tangentenschätzung, gemittelt mit
        // dem angrenzenden inneren Kontrollpunkt.
        let raw_start = Vec3::new(
            (prev.x + 2.0 * cur.x) / 3.0,
            (prev.y + 2.0 * cur.y) / 3.0,
            0.0,
        );
        let raw_end = Vec3::new(
            (2.0 * next.x + next2.x) / 3.0,
            (2.0 * next.y + next2.y) / 3.0,
            0.0,
        );
        let c0 = midpoint_xy(raw_start, c1);
        let c3 = midpoint_xy(raw_end, c2);

        segments.push(CurveVertex::new(c0, color));
        segments.push(CurveVertex::new(c1, color));
        segments.push(CurveVertex::new(c2, color));
        segments.push(CurveVertex::new(c3, color));
    }

    segments
}
