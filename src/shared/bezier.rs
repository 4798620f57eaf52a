//! Reine Geometrie-Funktionen für kubische Bezier-Segmente.

use glam::Vec3;

/// Punkt auf einem kubischen Bezier-Segment (t ∈ [0, 1]).
pub fn cubic_bezier_point(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    let u2 = u * u;
    let t2 = t * t;
    p0 * (u2 * u) + p1 * (3.0 * u2 * t) + p2 * (3.0 * u * t2) + p3 * (t2 * t)
}

/// Erste Ableitung eines kubischen Bezier-Segments nach t.
pub fn cubic_bezier_derivative(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    (p1 - p0) * (3.0 * u * u) + (p2 - p1) * (6.0 * u * t) + (p3 - p2) * (3.0 * t * t)
}

/// Approximierte Länge einer Polyline.
pub fn polyline_length(points: &[Vec3]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_bezier_endpoints() {
        let p0 = Vec3::new(0.0, 0.0, 0.0);
        let p1 = Vec3::new(1.0, 2.0, 0.0);
        let p2 = Vec3::new(3.0, 2.0, 0.0);
        let p3 = Vec3::new(4.0, 0.0, 0.0);

        assert_eq!(cubic_bezier_point(p0, p1, p2, p3, 0.0), p0);
        assert_eq!(cubic_bezier_point(p0, p1, p2, p3, 1.0), p3);
    }

    #[test]
    fn test_cubic_bezier_derivative_at_endpoints() {
        let p0 = Vec3::ZERO;
        let p1 = Vec3::new(1.0, 1.0, 0.0);
        let p2 = Vec3::new(3.0, 1.0, 0.0);
        let p3 = Vec3::new(4.0, 0.0, 0.0);

        let d0 = cubic_bezier_derivative(p0, p1, p2, p3, 0.0);
        let d1 = cubic_bezier_derivative(p0, p1, p2, p3, 1.0);
        assert_relative_eq!(d0.x, 3.0 * (p1 - p0).x, epsilon = 1e-5);
        assert_relative_eq!(d1.x, 3.0 * (p3 - p2).x, epsilon = 1e-5);
    }

    #[test]
    fn test_polyline_length_straight() {
        let points = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 4.0, 0.0),
            Vec3::new(0.0, 10.0, 0.0),
        ];
        assert_relative_eq!(polyline_length(&points), 10.0, epsilon = 1e-5);
    }
}
