//! Catmull-Rom-Spline: tangentenbasierte Bezier-Kontrollpunkte plus
//! de-Casteljau-Abtastung mit fester Auflösung.

use glam::{Vec2, Vec3};

use super::polygon::ControlPolygon;
use super::vertex::CurveVertex;

/// Fester Tangenten-Skalierungsfaktor (Tension).
pub const TENSION: f32 = 0.2;

/// Abtastwerte pro Segment: t = j/15 für j in [0, 15).
pub const SAMPLES_PER_SEGMENT: usize = 15;

/// Stufe 1: Bezier-Kontrollpunkte, deren Tangenten die Kurve durch jeden
/// Original-Kontrollpunkt laufen lassen (die definierende Catmull-Rom-Eigenschaft).
///
/// Pro Kante i (cur = P[i], nxt = P[i+1], mit prev und next2 für die Tangenten):
///   c0 = cur
///   c1 = cur + w·(nxt − prev)
///   c2 = nxt − w·(next2 − cur)
///   c3 = nxt
/// Ausgabe sind 4·N Vertices; z wird auf 0 emittiert (2D-Stufe).
pub fn catmull_rom_control_points(polygon: &ControlPolygon, color: [f32; 4]) -> Vec<CurveVertex> {
    let n = polygon.len();
    let points = polygon.points();
    let mut control = Vec::with_capacity(4 * n);

    for i in 0..n {
        let prev = points[polygon.prev(i)].position;
        let cur = points[i].position;
        let nxt = points[polygon.next(i)].position;
        let next2 = points[polygon.next2(i)].position;

        let start_tangent = Vec2::new(TENSION * (nxt.x - prev.x), TENSION * (nxt.y - prev.y));
        let end_tangent = Vec2::new(TENSION * (next2.x - cur.x), TENSION * (next2.y - cur.y));

        let c0 = Vec3::new(cur.x, cur.y, 0.0);
        let c1 = Vec3::new(cur.x + start_tangent.x, cur.y + start_tangent.y, 0.0);
        let c2 = Vec3::new(nxt.x - end_tangent.x, nxt.y - end_tangent.y, 0.0);
        let c3 = Vec3::new(nxt.x, nxt.y, 0.0);

        control.push(CurveVertex::new(c0, color));
        control.push(CurveVertex::new(c1, color));
        control.push(CurveVertex::new(c2, color));
        control.push(CurveVertex::new(c3, color));
    }

    control
}

/// De-Casteljau-Auswertung eines kubischen Segments bei Parameter t.
///
/// Drei Runden paarweiser linearer Interpolation über die vier Segmentpunkte;
/// komponentenweise nur auf x und y (bewusste 2D-Vereinfachung).
pub fn de_casteljau_xy(segment: [Vec2; 4], t: f32) -> Vec2 {
    let mut points = segment;
    for round in 1..4 {
        for k in 0..(4 - round) {
            points[k] = points[k].lerp(points[k + 1], t);
        }
    }
    points[0]
}

/// Stufe 2: tastet jedes Segment der Kontrollpunkt-Stufe bei t = j/15 ab.
///
/// `control` muss ein Vielfaches von 4 Vertices enthalten (4 pro Segment);
/// Ausgabe sind exakt `SAMPLES_PER_SEGMENT` Vertices pro Segment.
pub fn sample_segments(control: &[CurveVertex], color: [f32; 4]) -> Vec<CurveVertex> {
    let segment_count = control.len() / 4;
    let mut samples = Vec::with_capacity(segment_count * SAMPLES_PER_SEGMENT);

    for segment in 0..segment_count {
        let base = 4 * segment;
        let points = [
            control[base].position.truncate(),
            control[base + 1].position.truncate(),
            control[base + 2].position.truncate(),
            control[base + 3].position.truncate(),
        ];
        for j in 0..SAMPLES_PER_SEGMENT {
            let t = j as f32 / SAMPLES_PER_SEGMENT as f32;
            let p = de_casteljau_xy(points, t);
            samples.push(CurveVertex::new(Vec3::new(p.x, p.y, 0.0), color));
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PT_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    const CURVE_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

    #[test]
    fn test_control_points_match_tangent_formula() {
        let polygon = ControlPolygon::new();
        let control = catmull_rom_control_points(&polygon, PT_COLOR);
        assert_eq!(control.len(), 4 * polygon.len());

        for i in 0..polygon.len() {
            let prev = polygon.points()[polygon.prev(i)].position;
            let cur = polygon.points()[i].position;
            let nxt = polygon.points()[polygon.next(i)].position;
            let next2 = polygon.points()[polygon.next2(i)].position;

            let c0 = control[4 * i].position;
            let c1 = control[4 * i + 1].position;
            let c2 = control[4 * i + 2].position;
            let c3 = control[4 * i + 3].position;

            assert_relative_eq!(c0.x, cur.x, epsilon = 1e-6);
            assert_relative_eq!(c3.y, nxt.y, epsilon = 1e-6);
            assert_relative_eq!(c1.x, cur.x + TENSION * (nxt.x - prev.x), epsilon = 1e-6);
            assert_relative_eq!(c1.y, cur.y + TENSION * (nxt.y - prev.y), epsilon = 1e-6);
            assert_relative_eq!(c2.x, nxt.x - TENSION * (next2.x - cur.x), epsilon = 1e-6);
            assert_relative_eq!(c2.y, nxt.y - TENSION * (next2.y - cur.y), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_de_casteljau_endpoints_and_midpoint() {
        let segment = [
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(2.0, 3.0),
            Vec2::new(3.0, 0.0),
        ];
        let start = de_casteljau_xy(segment, 0.0);
        assert_relative_eq!(start.x, 0.0);
        assert_relative_eq!(start.y, 0.0);

        // Bei t = 0.5 ist die kubische Bezier-Auswertung geschlossen bekannt:
        // (p0 + 3·p1 + 3·p2 + p3) / 8.
        let mid = de_casteljau_xy(segment, 0.5);
        assert_relative_eq!(mid.x, (0.0 + 3.0 * 1.0 + 3.0 * 2.0 + 3.0) / 8.0, epsilon = 1e-6);
        assert_relative_eq!(mid.y, (0.0 + 3.0 * 3.0 + 3.0 * 3.0 + 0.0) / 8.0, epsilon = 1e-6);
    }

    #[test]
    fn test_sample_count_is_fifteen_per_segment() {
        let polygon = ControlPolygon::new();
        let control = catmull_rom_control_points(&polygon, PT_COLOR);
        let samples = sample_segments(&control, CURVE_COLOR);
        assert_eq!(samples.len(), SAMPLES_PER_SEGMENT * polygon.len());
    }

    #[test]
    fn test_curve_interpolates_every_control_point() {
        let polygon = ControlPolygon::new();
        let control = catmull_rom_control_points(&polygon, PT_COLOR);
        let samples = sample_segments(&control, CURVE_COLOR);

        // Segmentanfang (t = 0) liegt exakt auf dem Originalpunkt P[i].
        for i in 0..polygon.len() {
            let sample = samples[SAMPLES_PER_SEGMENT * i].position;
            let original = polygon.points()[i].position;
            assert_relative_eq!(sample.x, original.x, epsilon = 1e-5);
            assert_relative_eq!(sample.y, original.y, epsilon = 1e-5);
        }
    }
}
